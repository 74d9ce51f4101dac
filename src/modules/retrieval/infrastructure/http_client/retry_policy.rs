//! Bounded retry policy for catalog requests
//!
//! Attempts are spaced by a fixed pause (no backoff) and each attempt may be
//! bounded by its own timeout.

use std::time::Duration;

use crate::shared::config::CatalogConfig;

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Pause between a failed attempt and the next one
    pub delay: Duration,
    /// Upper bound for a single attempt
    pub timeout: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(3, Duration::from_millis(1000))
    }
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: config.inter_attempt_delay,
            timeout: config.per_attempt_timeout,
        }
    }

    /// Pause to take after failed attempt number `attempt` (1-based), or
    /// `None` when no attempts remain
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        (attempt < self.max_attempts).then_some(self.delay)
    }
}
