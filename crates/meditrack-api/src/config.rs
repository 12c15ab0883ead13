//! API configuration.
//!
//! One environment variable selects the API base URL. `.env` files in the
//! working directory are honored.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "MEDITRACK_API_URL";

/// Base URL used when the variable is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL must use http or https: {0}")]
    UnsupportedScheme(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where and how to reach the MediTrack API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Always ends with `/`, so endpoint paths join beneath it.
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Configuration for an explicit base URL.
    pub fn new(base_url: &str) -> ConfigResult<Self> {
        let trimmed = base_url.trim();
        let mut url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            value: trimmed.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read [`API_URL_VAR`] (after loading `.env`), falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> ConfigResult<Self> {
        dotenv::dotenv().ok();
        Self::from_value(std::env::var(API_URL_VAR).ok())
    }

    /// Like [`Self::from_env`] with the variable's value passed in.
    pub fn from_value(value: Option<String>) -> ConfigResult<Self> {
        let config = match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Self::new(v)?,
            _ => Self::new(DEFAULT_API_URL)?,
        };
        debug!(base_url = %config.base_url, "API configured");
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL of an endpoint path such as `/exams/today`.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}
