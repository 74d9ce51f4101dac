//! Request primitive used by the retrieval layer
//!
//! `ReqwestTransport` sends requests through a shared `reqwest` client,
//! throttled by a `governor` rate limiter unless built unthrottled. Status
//! codes are returned as-is; deciding what counts as a failure belongs to the
//! caller.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use std::num::NonZeroU32;

use crate::modules::retrieval::domain::{FetchErrorKind, HttpRequest, HttpResponse};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RequestTransport: Send + Sync {
    /// Send one request. Resolves once the full body has been read.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchErrorKind>;
}

pub struct ReqwestTransport {
    client: Client,
    /// Catalog quota; `None` for transports that must never queue
    rate_limiter: Option<DefaultDirectRateLimiter>,
    user_agent: String,
}

impl ReqwestTransport {
    /// Transport throttled by the configured catalog quota
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let rate_limiter = Self::create_rate_limiter(config)?;
        Self::build(config, Some(rate_limiter))
    }

    /// Transport without a rate limiter, for liveness checks against hosts
    /// outside the catalogs
    pub fn unthrottled(config: &CatalogConfig) -> AppResult<Self> {
        Self::build(config, None)
    }

    fn build(
        config: &CatalogConfig,
        rate_limiter: Option<DefaultDirectRateLimiter>,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            rate_limiter,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Create a rate limiter from the configured request rate and burst capacity
    fn create_rate_limiter(config: &CatalogConfig) -> AppResult<DefaultDirectRateLimiter> {
        let period = config.rate_limit_period()?;
        let burst = NonZeroU32::new(config.burst_size.max(1))
            .ok_or_else(|| AppError::ConfigurationError("Invalid burst size".to_string()))?;
        let quota = Quota::with_period(period)
            .ok_or_else(|| {
                AppError::ConfigurationError(format!("Invalid rate limit period: {:?}", period))
            })?
            .allow_burst(burst);

        Ok(RateLimiter::direct(quota))
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter
            .as_ref()
            .map_or(true, |limiter| limiter.check().is_ok())
    }
}

#[async_trait]
impl RequestTransport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchErrorKind> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let response = self
            .client
            .request(request.method.clone(), &request.url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
