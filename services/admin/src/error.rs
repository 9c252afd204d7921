//! Admin error taxonomy and its HTTP mapping
//!
//! Every failure is reported once to the caller as a plain-text body;
//! nothing is retried at this layer. Validation errors keep distinct
//! message prefixes so callers can pattern-match them.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::core::CoreError;

/// Request-terminal errors surfaced by the admin surface.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown market {0:?}")]
    UnknownMarket(String),

    #[error("market {0:?} not running")]
    MarketNotRunning(String),

    #[error("invalid suspend time: {0:?}")]
    InvalidSuspendTime(String),

    #[error("specified market suspend time is in the past: {0}")]
    SuspendTimeInPast(i64),

    #[error("invalid persist book boolean: {0:?}")]
    InvalidPersistFlag(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="market admin""#)],
                "Unauthorized".to_owned(),
            )
                .into_response(),
            AppError::Core(err) => {
                tracing::error!(%err, "core request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
                    .into_response()
            }
            err => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_market_message_quotes_name() {
        let err = AppError::UnknownMarket("dcr_btc".into());
        assert_eq!(err.to_string(), r#"unknown market "dcr_btc""#);
    }

    #[test]
    fn test_not_running_message() {
        let err = AppError::MarketNotRunning("dcr_btc".into());
        assert_eq!(err.to_string(), r#"market "dcr_btc" not running"#);
    }

    #[test]
    fn test_validation_message_prefixes() {
        assert!(
            AppError::InvalidSuspendTime("QWERT".into())
                .to_string()
                .starts_with("invalid suspend time")
        );
        assert!(
            AppError::SuspendTimeInPast(12)
                .to_string()
                .starts_with("specified market suspend time is in the past")
        );
        assert!(
            AppError::InvalidPersistFlag("blahblahblah".into())
                .to_string()
                .starts_with("invalid persist book boolean")
        );
    }
}
