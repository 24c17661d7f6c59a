//! Jikan API client error types.

use std::sync::Arc;

/// Errors from the Jikan metadata API client.
#[derive(Debug, thiserror::Error)]
pub enum JikanError {
    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid limit parameter (must be 1-25).
    #[error("invalid limit: must be 1-25")]
    InvalidLimit,

    /// Rate limited by the API.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for JikanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { JikanError::Timeout } else { JikanError::Network(Arc::new(err)) }
    }
}

impl From<JikanError> for sama_core::Error {
    fn from(err: JikanError) -> Self {
        sama_core::Error::LookupFailed(err.to_string())
    }
}
