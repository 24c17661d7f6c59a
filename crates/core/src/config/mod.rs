//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SAMA_*)
//! 2. TOML config file (if SAMA_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::text::MatchMode;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SAMA_*)
/// 2. TOML config file (if SAMA_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// User-Agent string for HTTP requests.
    ///
    /// Set via SAMA_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via SAMA_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Base URL of the Jikan metadata API.
    ///
    /// Set via SAMA_JIKAN_BASE_URL environment variable.
    #[serde(default = "default_jikan_base_url")]
    pub jikan_base_url: String,

    /// Result cap per metadata query.
    ///
    /// Set via SAMA_LOOKUP_LIMIT environment variable.
    #[serde(default = "default_lookup_limit")]
    pub lookup_limit: u8,

    /// Expiry for an entity's cached page body and resolved name, in
    /// seconds. Unset means cache-forever.
    ///
    /// Set via SAMA_PAGE_TTL_SECS environment variable.
    #[serde(default)]
    pub page_ttl_secs: Option<u64>,

    /// Require near-exact titles during metadata resolution instead of the
    /// default substring-tolerant matching.
    ///
    /// Set via SAMA_STRICT_MATCHING environment variable.
    #[serde(default)]
    pub strict_matching: bool,
}

fn default_user_agent() -> String {
    "sama-index/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_jikan_base_url() -> String {
    "https://api.jikan.moe/v4".into()
}

fn default_lookup_limit() -> u8 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            jikan_base_url: default_jikan_base_url(),
            lookup_limit: default_lookup_limit(),
            page_ttl_secs: None,
            strict_matching: false,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache expiry as Duration; `None` means cache-forever.
    pub fn page_ttl(&self) -> Option<Duration> {
        self.page_ttl_secs.map(Duration::from_secs)
    }

    /// Title matching policy for metadata resolution.
    pub fn match_mode(&self) -> MatchMode {
        if self.strict_matching { MatchMode::Strict } else { MatchMode::Loose }
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `SAMA_`
    /// 2. TOML file from `SAMA_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("SAMA_CONFIG_FILE") {
            tracing::debug!("loading config file from {}", config_path);
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("SAMA_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
