//! Runtime configuration.
//!
//! Settings come from environment variables and are refined with the
//! builder methods (CLI flags, tests). The access key is never compiled in.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_PER_PAGE: u32 = 20;
pub const DEFAULT_RANDOM_COUNT: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Largest page the Unsplash API accepts.
pub const MAX_PER_PAGE: u32 = 30;

pub const ENV_ACCESS_KEY: &str = "UNSPLASH_ACCESS_KEY";
pub const ENV_ACCESS_KEY_ALT: &str = "WALLX_ACCESS_KEY";
pub const ENV_API_URL: &str = "WALLX_API_URL";
pub const ENV_PER_PAGE: &str = "WALLX_PER_PAGE";
pub const ENV_RANDOM_COUNT: &str = "WALLX_RANDOM_COUNT";
pub const ENV_TIMEOUT_SECS: &str = "WALLX_TIMEOUT_SECS";

/// Configuration for the photo client and feeds.
///
/// ```ignore
/// use wallx::startup::AppConfig;
///
/// let config = AppConfig::from_env()?
///     .with_per_page(30)
///     .with_request_timeout_secs(5);
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the photo API, without trailing slash
    pub api_base_url: String,
    /// Unsplash access key sent as `Client-ID`
    pub access_key: Option<String>,
    /// Page size for search and category feeds
    pub per_page: u32,
    /// Batch size for the random feed
    pub random_count: u32,
    /// Per-request timeout
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_key: None,
            per_page: DEFAULT_PER_PAGE,
            random_count: DEFAULT_RANDOM_COUNT,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_random_count(mut self, count: u32) -> Self {
        self.random_count = count;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name -> value lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(key) = get(ENV_ACCESS_KEY).or_else(|| get(ENV_ACCESS_KEY_ALT)) {
            config = config.with_access_key(key);
        }
        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(value) = get(ENV_PER_PAGE) {
            config.per_page = parse_positive(ENV_PER_PAGE, &value)?;
        }
        if let Some(value) = get(ENV_RANDOM_COUNT) {
            config.random_count = parse_positive(ENV_RANDOM_COUNT, &value)?;
        }
        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            config.request_timeout_secs = u64::from(parse_positive(ENV_TIMEOUT_SECS, &value)?);
        }

        Ok(config)
    }

    /// Check the settings needed before any request goes out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(ConfigError::MissingAccessKey);
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone()));
        }
        for (var, value) in [
            (ENV_PER_PAGE, self.per_page),
            (ENV_RANDOM_COUNT, self.random_count),
        ] {
            if value == 0 || value > MAX_PER_PAGE {
                return Err(ConfigError::InvalidNumber {
                    var: var.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_positive(var: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            var: var.to_string(),
            value: value.to_string(),
        })
}
