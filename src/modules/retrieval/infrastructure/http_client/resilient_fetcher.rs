//! Bounded-retry, timeout-bounded fetching of JSON payloads
//!
//! Every failure (transport error, timeout, non-success status, undecodable
//! body) is retried until the policy's attempt budget is spent. Attempts run
//! strictly one after another. A timed-out or cancelled attempt is dropped,
//! which aborts the underlying request.

use futures::future::{join_all, try_join_all};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::retry_policy::RetryPolicy;
use super::transport::RequestTransport;
use crate::modules::retrieval::domain::{FetchErrorKind, FetchOutcome, HttpRequest};
use crate::shared::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct ResilientFetcher {
    transport: Arc<dyn RequestTransport>,
    policy: RetryPolicy,
}

impl ResilientFetcher {
    pub fn new(transport: Arc<dyn RequestTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub async fn fetch(&self, request: &HttpRequest) -> FetchOutcome {
        self.run(request, None).await
    }

    /// Like [`fetch`](Self::fetch), but stops as soon as `token` is cancelled,
    /// dropping any attempt still in flight
    pub async fn fetch_with_cancel(
        &self,
        request: &HttpRequest,
        token: &CancellationToken,
    ) -> FetchOutcome {
        self.run(request, Some(token)).await
    }

    /// Fetch and deserialize the payload
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: &HttpRequest) -> AppResult<T> {
        let payload = self.fetch(request).await.into_result()?;
        serde_json::from_value(payload).map_err(AppError::from)
    }

    /// Issue every request concurrently and wait for all of them.
    /// Outcomes are returned in request order.
    pub async fn fetch_all(&self, requests: &[HttpRequest]) -> Vec<FetchOutcome> {
        join_all(requests.iter().map(|request| self.fetch(request))).await
    }

    /// Fail-fast variant of [`fetch_all`](Self::fetch_all): the first terminal
    /// failure is returned and the remaining fetches are dropped
    pub async fn try_fetch_all(&self, requests: &[HttpRequest]) -> AppResult<Vec<Value>> {
        try_join_all(
            requests
                .iter()
                .map(|request| async move { self.fetch(request).await.into_result() }),
        )
        .await
    }

    async fn run(&self, request: &HttpRequest, token: Option<&CancellationToken>) -> FetchOutcome {
        let mut last_error: Option<FetchErrorKind> = None;

        for attempt in 1..=self.policy.max_attempts {
            let result = match token {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("{} {} cancelled during attempt {}", request.method, request.url, attempt);
                        return FetchOutcome::cancelled(last_error, attempt);
                    }
                    result = self.attempt(request) => result,
                },
                None => self.attempt(request).await,
            };

            match result {
                Ok(payload) => {
                    if attempt > 1 {
                        debug!(
                            "{} {} succeeded on attempt {} after {} retries",
                            request.method,
                            request.url,
                            attempt,
                            attempt - 1
                        );
                    }
                    return FetchOutcome::succeeded(payload, attempt);
                }
                Err(error) => {
                    let delay = self.policy.delay_after(attempt);
                    match delay {
                        Some(delay) => warn!(
                            "{} {} failed on attempt {}/{} ({}), retrying in {:?}",
                            request.method,
                            request.url,
                            attempt,
                            self.policy.max_attempts,
                            error,
                            delay
                        ),
                        None => warn!(
                            "{} {} failed on final attempt {} ({}), giving up",
                            request.method, request.url, attempt, error
                        ),
                    }
                    last_error = Some(error);

                    if let Some(delay) = delay {
                        match token {
                            Some(token) => tokio::select! {
                                biased;
                                _ = token.cancelled() => {
                                    return FetchOutcome::cancelled(last_error, attempt);
                                }
                                _ = sleep(delay) => {}
                            },
                            None => sleep(delay).await,
                        }
                    }
                }
            }
        }

        FetchOutcome::exhausted(last_error, self.policy.max_attempts)
    }

    async fn attempt(&self, request: &HttpRequest) -> Result<Value, FetchErrorKind> {
        let send = self.transport.send(request);
        let response = match self.policy.timeout {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .map_err(|_| FetchErrorKind::Timeout)??,
            None => send.await?,
        };

        if !response.is_success() {
            return Err(FetchErrorKind::BadStatus(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| FetchErrorKind::Decode(e.to_string()))
    }
}
