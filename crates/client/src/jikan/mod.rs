//! Jikan (MyAnimeList) metadata API client.
//!
//! Provides a client for the Jikan anime search endpoint with rate
//! limiting, request validation, and response normalization.
//!
//! ### Specification
//!
//! - **Endpoint**: `https://api.jikan.moe/v4/anime`
//! - **Authentication**: none; public API.
//! - **Rate Limiting**: 3 requests/second published limit, enforced with
//!   a minimum request interval.
//! - **Normalization**: responses reduce to `AnimeRecord` carrying the
//!   three title variants and the release year sources.

pub mod error;
pub mod request;
pub mod response;

pub use error::JikanError;
pub use request::SearchRequest;
pub use response::{AnimeRecord, JikanAired, JikanAnime, JikanSearchResponse};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Default base URL for the Jikan API.
const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "sama-index/0.1";

/// Minimum interval between requests (Jikan's published limit is 3/s).
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(334);

/// Jikan API client configuration.
#[derive(Debug, Clone)]
pub struct JikanConfig {
    /// Base URL (default: https://api.jikan.moe/v4).
    pub base_url: String,
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: sama-index/0.x).
    pub user_agent: String,
}

impl Default for JikanConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl JikanConfig {
    /// Derive a client configuration from the application config.
    pub fn from_app(config: &sama_core::AppConfig) -> Self {
        Self {
            base_url: config.jikan_base_url.clone(),
            user_agent: config.user_agent.clone(),
            ..Default::default()
        }
    }
}

/// Rate limiter to enforce request intervals.
#[derive(Debug)]
struct RateLimiter {
    last_request: Mutex<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(Instant::now().checked_sub(min_interval).unwrap_or_else(Instant::now)),
            min_interval,
        }
    }

    /// Acquire permission to make a request, waiting if necessary.
    async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < self.min_interval {
            tokio::time::sleep(self.min_interval - elapsed).await;
        }
        *last = Instant::now();
    }
}

/// Title lookup seam between the name resolver and the wire client.
#[async_trait]
pub trait TitleSearch: Send + Sync {
    /// Up to `limit` records matching `query`.
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<AnimeRecord>, JikanError>;
}

/// Jikan API client.
#[derive(Debug, Clone)]
pub struct JikanClient {
    http: reqwest::Client,
    config: JikanConfig,
    rate_limiter: Arc<RateLimiter>,
}

impl JikanClient {
    /// Create a new Jikan client with the given configuration.
    pub fn new(config: JikanConfig) -> Result<Self, JikanError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(JikanError::from)?;

        Ok(Self { http, config, rate_limiter: Arc::new(RateLimiter::new(MIN_REQUEST_INTERVAL)) })
    }

    /// Execute an anime search query.
    ///
    /// This method handles rate limiting, request validation, and response
    /// normalization.
    pub async fn search_anime(&self, req: SearchRequest) -> Result<Vec<AnimeRecord>, JikanError> {
        req.validate()?;

        self.rate_limiter.acquire().await;

        let start = Instant::now();
        let url = format!("{}/anime", self.config.base_url);

        tracing::debug!("searching Jikan: query={}", req.q);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(&req)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Jikan response status: {}", status);

        if status == 429 {
            return Err(JikanError::RateLimited);
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(JikanError::HttpError { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        let api_response: JikanSearchResponse =
            serde_json::from_slice(&bytes).map_err(|e| JikanError::Parse(e.to_string()))?;

        tracing::debug!(
            "search completed in {:?}, {} results",
            start.elapsed(),
            api_response.data.len()
        );

        Ok(api_response.data.into_iter().map(AnimeRecord::from).collect())
    }
}

#[async_trait]
impl TitleSearch for JikanClient {
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<AnimeRecord>, JikanError> {
        self.search_anime(SearchRequest::titled(query, limit)).await
    }
}
