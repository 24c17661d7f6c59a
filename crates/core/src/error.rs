//! Unified error types for sama-index.
//!
//! The catalogue's public accessors degrade to empty values instead of
//! failing, so this type only surfaces at the individual network seams
//! (fetch, metadata lookup) and during configuration loading, where
//! callers may still want a single error type to bubble up.

/// Unified error type for catalogue operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page fetch failed (transport error or non-success status).
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// Metadata lookup failed for a candidate name.
    #[error("metadata lookup failed: {0}")]
    LookupFailed(String),

    /// Configuration loading or validation failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_error_display() {
        let err = Error::LookupFailed("HTTP error: 500".to_string());
        assert!(err.to_string().contains("metadata lookup failed"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() }
            .into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("timeout_ms"));
    }
}
