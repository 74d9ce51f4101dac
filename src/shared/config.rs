//! Catalog configuration
//!
//! Defaults mirror the behaviour expected by the retrieval layer: three
//! attempts, a fixed one second pause between attempts and no per-attempt
//! timeout. Every value can be overridden from the environment (or a `.env`
//! file loaded through `dotenvy`).

use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const ENV_MEDIA_BASE_URL: &str = "REELCHAIN_MEDIA_BASE_URL";
pub const ENV_GRAPH_BASE_URL: &str = "REELCHAIN_GRAPH_BASE_URL";
pub const ENV_API_KEY: &str = "REELCHAIN_API_KEY";
pub const ENV_MAX_ATTEMPTS: &str = "REELCHAIN_MAX_ATTEMPTS";
pub const ENV_RETRY_DELAY_MS: &str = "REELCHAIN_RETRY_DELAY_MS";
pub const ENV_TIMEOUT_MS: &str = "REELCHAIN_TIMEOUT_MS";
pub const ENV_PROBE_TIMEOUT_MS: &str = "REELCHAIN_PROBE_TIMEOUT_MS";
pub const ENV_RATE_LIMIT_RPS: &str = "REELCHAIN_RATE_LIMIT_RPS";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL of the general media catalog (`/media`, `/servers`)
    pub media_base_url: String,
    /// Base URL of the relation graph catalog (`/search`)
    pub graph_base_url: String,
    pub api_key: Option<String>,
    pub max_attempts: u32,
    pub inter_attempt_delay: Duration,
    pub per_attempt_timeout: Option<Duration>,
    pub probe_timeout: Duration,
    pub requests_per_second: f64,
    pub burst_size: u32,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            media_base_url: "http://localhost:8080".to_string(),
            graph_base_url: "http://localhost:8080".to_string(),
            api_key: None,
            max_attempts: 3,
            inter_attempt_delay: Duration::from_millis(1000),
            per_attempt_timeout: None,
            probe_timeout: Duration::from_millis(3000),
            requests_per_second: 2.0,
            burst_size: 4,
            user_agent: format!("reelchain/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the process environment, reading `.env` first
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_MEDIA_BASE_URL) {
            config.media_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup(ENV_GRAPH_BASE_URL) {
            config.graph_base_url = url.trim_end_matches('/').to_string();
        }
        config.api_key = lookup(ENV_API_KEY).filter(|key| !key.is_empty());

        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_attempts = parse_number(ENV_MAX_ATTEMPTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_RETRY_DELAY_MS) {
            config.inter_attempt_delay = Duration::from_millis(parse_number(ENV_RETRY_DELAY_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis: u64 = parse_number(ENV_TIMEOUT_MS, &raw)?;
            // 0 disables the per-attempt timeout
            config.per_attempt_timeout = (millis > 0).then(|| Duration::from_millis(millis));
        }
        if let Some(raw) = lookup(ENV_PROBE_TIMEOUT_MS) {
            config.probe_timeout = Duration::from_millis(parse_number(ENV_PROBE_TIMEOUT_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_RATE_LIMIT_RPS) {
            config.requests_per_second = raw.trim().parse::<f64>().map_err(|_| {
                AppError::ConfigurationError(format!(
                    "{} must be a number, got '{}'",
                    ENV_RATE_LIMIT_RPS, raw
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.max_attempts == 0 {
            return Err(AppError::ConfigurationError(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        self.rate_limit_period()?;
        Ok(())
    }

    /// Time between requests implied by `requests_per_second`.
    /// Rejects rates that are not finite, not positive, or whose period does
    /// not fit in a `Duration`.
    pub fn rate_limit_period(&self) -> AppResult<Duration> {
        let rate = self.requests_per_second;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(AppError::ConfigurationError(format!(
                "requests_per_second must be a positive number, got {}",
                rate
            )));
        }

        let period = Duration::try_from_secs_f64(1.0 / rate).map_err(|e| {
            AppError::ConfigurationError(format!("Request rate {} is out of range: {}", rate, e))
        })?;
        if period.is_zero() {
            return Err(AppError::ConfigurationError(format!(
                "Request rate {} is too high",
                rate
            )));
        }
        Ok(period)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim().parse::<T>().map_err(|_| {
        AppError::ConfigurationError(format!("{} must be a whole number, got '{}'", key, raw))
    })
}
