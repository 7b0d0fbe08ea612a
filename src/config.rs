//! Client configuration read from the environment.
//!
//! | variable                   | default                  |
//! |----------------------------|--------------------------|
//! | `STUDIO_API_URL`           | `http://localhost:8080/` |
//! | `STUDIO_HTTP_TIMEOUT_SECS` | `30`                     |
//! | `STUDIO_SESSION_FILE`      | unset (no persistence)   |

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API url '{0}': {1}")]
    InvalidUrl(String, String),
    #[error("API url '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("invalid HTTP timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base of the studio API; always ends with `/` so relative `api/...` paths join under it.
    pub api_url: Url,
    pub timeout: Duration,
    pub session_file: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API url is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: None,
            user_agent: format!("yoga-studio/{} (+reqwest)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut cfg = ClientConfig::default();
        if let Ok(url) = std::env::var("STUDIO_API_URL") {
            cfg.api_url = parse_api_url(&url)?;
        }
        if let Ok(secs) = std::env::var("STUDIO_HTTP_TIMEOUT_SECS") {
            cfg.timeout = parse_timeout(&secs)?;
        }
        if let Ok(path) = std::env::var("STUDIO_SESSION_FILE") {
            if !path.trim().is_empty() {
                cfg.session_file = Some(PathBuf::from(path));
            }
        }
        Ok(cfg)
    }

    pub fn with_api_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_url = parse_api_url(url)?;
        Ok(self)
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }
}

pub fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidUrl(trimmed.to_string(), e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
