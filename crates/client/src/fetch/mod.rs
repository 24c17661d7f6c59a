//! HTTP page fetching for catalogue entries.
//!
//! ### Behavior
//! - Plain GET with the configured User-Agent, timeout, and redirect cap.
//! - Non-success statuses are errors at this layer; the catalogue entity
//!   degrades them to an empty cached page body.
//!
//! ### Stable Abstraction
//! - The `PageFetcher` trait keeps the entity decoupled from the
//!   transport, so tests and alternative transports plug in freely.

pub mod url;

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub use url::{ensure_trailing_slash, site_root, url_slug};

/// Configuration for the page fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "sama-index/0.1")
    pub user_agent: String,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { user_agent: "sama-index/0.1".to_string(), timeout: Duration::from_millis(20_000), max_redirects: 5 }
    }
}

impl FetchConfig {
    /// Derive a fetch configuration from the application config.
    pub fn from_app(config: &sama_core::AppConfig) -> Self {
        Self { user_agent: config.user_agent.clone(), timeout: config.timeout(), ..Default::default() }
    }
}

/// Errors from page fetching.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// Non-success HTTP status.
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FetchError::Timeout } else { FetchError::Network(Arc::new(err)) }
    }
}

impl From<FetchError> for sama_core::Error {
    fn from(err: FetchError) -> Self {
        sama_core::Error::FetchFailed(err.to_string())
    }
}

/// Transport seam for the catalogue entity.
///
/// Implementations must be reentrant-safe; one fetcher is shared across
/// entities.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET a URL and return the body text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed page fetcher.
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| FetchError::Build(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();

        let response = self
            .http
            .get(url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = response.text().await.map_err(|e| FetchError::Body(e.to_string()))?;

        tracing::debug!("fetched {} in {:?} ({} bytes)", url, start.elapsed(), body.len());

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.user_agent, "sama-index/0.1");
        assert_eq!(config.timeout, Duration::from_millis(20_000));
        assert_eq!(config.max_redirects, 5);
    }

    #[test]
    fn test_fetch_config_from_app() {
        let app = sama_core::AppConfig { user_agent: "custom/1.0".into(), timeout_ms: 5_000, ..Default::default() };
        let config = FetchConfig::from_app(&app);
        assert_eq!(config.user_agent, "custom/1.0");
        assert_eq!(config.timeout, Duration::from_millis(5_000));
        assert_eq!(config.max_redirects, 5);
    }

    #[test]
    fn test_http_fetcher_new() {
        let fetcher = HttpFetcher::new(FetchConfig::default());
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_fetch_error_into_core_error() {
        let err: sama_core::Error = FetchError::Status { status: 404 }.into();
        assert!(matches!(err, sama_core::Error::FetchFailed(_)));
        assert!(err.to_string().contains("404"));
    }
}
