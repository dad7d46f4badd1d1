//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the Tessera gateway.
///
/// Cache-layer failures are recovered inside the cache crate and never
/// reach a transaction caller; the variants here cover everything that
/// *is* allowed to surface at the API boundary.
#[derive(Error, Debug)]
pub enum TesseraError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Transaction processing error
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TesseraError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Configuration(_)
            | Self::Cache(_)
            | Self::Transaction(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Transaction(_) => "TRANSACTION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

impl From<serde_json::Error> for TesseraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `TesseraError`.
    #[must_use]
    pub fn from_error(error: &TesseraError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&TesseraError> for ErrorResponse {
    fn from(error: &TesseraError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(TesseraError::validation("bad fields").status_code(), 400);
        assert_eq!(TesseraError::configuration("bad backend").status_code(), 500);
        assert_eq!(TesseraError::Cache("down".to_string()).status_code(), 500);
        assert_eq!(TesseraError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TesseraError::validation("x").error_code(), "VALIDATION_ERROR");
        assert_eq!(TesseraError::Cache("x".to_string()).error_code(), "CACHE_ERROR");
        assert_eq!(
            TesseraError::Transaction("x".to_string()).error_code(),
            "TRANSACTION_ERROR"
        );
        assert_eq!(TesseraError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let validation = TesseraError::validation("fields are required");
        assert!(validation.to_string().contains("fields are required"));

        let configuration = TesseraError::configuration("unknown backend");
        assert!(configuration.to_string().contains("unknown backend"));

        let internal = TesseraError::internal("panic");
        assert!(internal.to_string().contains("panic"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let err = TesseraError::from(json_err);
        assert!(matches!(err, TesseraError::Internal(_)));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_response_from_error() {
        let err = TesseraError::validation("fields cannot be empty");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert!(response.message.contains("fields cannot be empty"));
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = TesseraError::internal("boom");
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "INTERNAL_ERROR");
    }
}
