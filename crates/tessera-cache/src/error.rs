//! Cache error types.
//!
//! These errors stay inside the cache layer: backends catch them, log,
//! and degrade to a miss or a skipped write. They exist so failures are
//! classified for logging, not so callers can observe them.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache-related errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Redis command error.
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Redis pool error.
    #[error("Redis pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CacheError {
    /// Returns true for expected-transient failures (remote
    /// unavailability), which log at `warn`; everything else logs at
    /// `error`.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Redis(_) | Self::Pool(_))
    }
}

impl From<CacheError> for tessera_core::TesseraError {
    fn from(err: CacheError) -> Self {
        Self::Cache(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_is_not_transient() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err = CacheError::from(json_err);
        assert!(!err.is_transient());
    }

    #[test]
    fn test_configuration_is_not_transient() {
        let err = CacheError::Configuration("unknown backend".into());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_into_tessera_error() {
        let err = CacheError::Configuration("bad url".into());
        let core_err: tessera_core::TesseraError = err.into();
        assert_eq!(core_err.error_code(), "CACHE_ERROR");
        assert!(core_err.to_string().contains("bad url"));
    }
}
