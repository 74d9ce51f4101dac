use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::shared::errors::{AppError, AppResult};

/// Why a single attempt failed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum FetchErrorKind {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    BadStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchErrorKind {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchErrorKind::Timeout
        } else if let Some(status) = err.status() {
            FetchErrorKind::BadStatus(status.as_u16())
        } else if err.is_decode() {
            FetchErrorKind::Decode(err.to_string())
        } else {
            FetchErrorKind::Transport(err.to_string())
        }
    }
}

/// Terminal error reported once a fetch stops retrying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeError {
    ServerNotResponding,
    Cancelled,
}

impl OutcomeError {
    pub fn message(&self) -> &'static str {
        match self {
            OutcomeError::ServerNotResponding => "server is not responding",
            OutcomeError::Cancelled => "request was cancelled",
        }
    }
}

/// Result of one logical fetch, covering every attempt made for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchOutcome {
    pub success: bool,
    pub payload: Option<Value>,
    pub error: Option<OutcomeError>,
    /// Cause of the most recent failed attempt
    pub last_error: Option<FetchErrorKind>,
    pub attempts_made: u32,
}

impl FetchOutcome {
    pub fn succeeded(payload: Value, attempts_made: u32) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
            last_error: None,
            attempts_made,
        }
    }

    pub fn exhausted(last_error: Option<FetchErrorKind>, attempts_made: u32) -> Self {
        Self {
            success: false,
            payload: None,
            error: Some(OutcomeError::ServerNotResponding),
            last_error,
            attempts_made,
        }
    }

    pub fn cancelled(last_error: Option<FetchErrorKind>, attempts_made: u32) -> Self {
        Self {
            success: false,
            payload: None,
            error: Some(OutcomeError::Cancelled),
            last_error,
            attempts_made,
        }
    }

    /// Payload on success, otherwise an error naming the terminal state and
    /// the last concrete cause
    pub fn into_result(self) -> AppResult<Value> {
        if self.success {
            return Ok(self.payload.unwrap_or(Value::Null));
        }

        let terminal = self
            .error
            .unwrap_or(OutcomeError::ServerNotResponding)
            .message();
        let message = match &self.last_error {
            Some(cause) => format!(
                "{} after {} attempt(s), last error: {}",
                terminal, self.attempts_made, cause
            ),
            None => format!("{} after {} attempt(s)", terminal, self.attempts_made),
        };

        Err(match self.last_error {
            Some(FetchErrorKind::Timeout) => AppError::Timeout(message),
            Some(FetchErrorKind::BadStatus(_)) => AppError::ApiError(message),
            _ => AppError::ExternalServiceError(message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_into_result() {
        let outcome = FetchOutcome::succeeded(json!({"results": []}), 2);
        assert_eq!(outcome.into_result().unwrap(), json!({"results": []}));
    }

    #[test]
    fn test_exhausted_keeps_last_cause() {
        let outcome = FetchOutcome::exhausted(Some(FetchErrorKind::BadStatus(503)), 3);
        assert_eq!(outcome.error, Some(OutcomeError::ServerNotResponding));

        match outcome.into_result() {
            Err(AppError::ApiError(message)) => {
                assert!(message.contains("server is not responding"));
                assert!(message.contains("503"));
                assert!(message.contains("3 attempt(s)"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_timeout_maps_to_timeout_error() {
        let outcome = FetchOutcome::exhausted(Some(FetchErrorKind::Timeout), 3);
        assert!(matches!(outcome.into_result(), Err(AppError::Timeout(_))));
    }

    #[test]
    fn test_cancelled_outcome() {
        let outcome = FetchOutcome::cancelled(None, 1);
        assert!(!outcome.success);
        assert!(matches!(
            outcome.into_result(),
            Err(AppError::ExternalServiceError(message)) if message.contains("cancelled")
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let outcome = FetchOutcome::exhausted(Some(FetchErrorKind::Timeout), 3);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["attemptsMade"], 3);
        assert_eq!(json["error"], "server_not_responding");
        assert_eq!(json["lastError"]["kind"], "Timeout");
    }
}
