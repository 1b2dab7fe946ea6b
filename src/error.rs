//! Unified error types.
//!
//! Gateways return [`GatewayError`]. Slices normalize every gateway failure
//! into a [`FetchError`], which is the only error ever stored in state.

use thiserror::Error;

/// Top-level error for configuration and direct gateway use.
#[derive(Error, Debug)]
pub enum CoinwatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Transport-layer errors (the request itself failed).
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Errors raised at the gateway boundary while fetching or decoding a payload.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Schema mismatch: {0}")]
    Schema(String),
}

impl GatewayError {
    /// Whether the server answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, GatewayError::Status { .. })
    }
}

/// Error surfaced in a partition's `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_displays_message_only() {
        let err = FetchError::new("Failed to fetch coin prices.");
        assert_eq!(err.to_string(), "Failed to fetch coin prices.");
    }

    #[test]
    fn test_status_error_is_status() {
        let err = GatewayError::Status {
            status: 503,
            body: String::new(),
        };
        assert!(err.is_status());
        assert!(!GatewayError::Schema("x".into()).is_status());
    }
}
