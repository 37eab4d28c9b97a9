//! Configuration loading for planner-mcp
//!
//! Configuration comes from the environment only:
//! 1. `API_BASE_URL` - base URL of the planner API
//! 2. Default values

use anyhow::{bail, Context, Result};
use url::Url;

/// Environment variable holding the planner API base URL
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Main configuration structure
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Planner API configuration
    pub api: ApiConfig,
}

/// Planner API connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_user_agent() -> String {
    format!("planner-mcp/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Settings for the given base URL with default everything else
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        match lookup(API_BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => {
                config.api.base_url = normalize_base_url(&url)?;
            }
            _ => tracing::info!("{} not set, using {}", API_BASE_URL_VAR, config.api.base_url),
        }

        Ok(config)
    }
}

/// Check that `raw` is an http(s) URL and strip any trailing slash.
fn normalize_base_url(raw: &str) -> Result<String> {
    let raw = raw.trim();
    let url = Url::parse(raw).with_context(|| format!("invalid {}: {}", API_BASE_URL_VAR, raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "{} must use http or https, got scheme '{}'",
            API_BASE_URL_VAR,
            url.scheme()
        );
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.api.user_agent.starts_with("planner-mcp/"));
    }

    #[test]
    fn test_env_override_trims_trailing_slash() {
        let config = Config::from_lookup(|key| {
            (key == API_BASE_URL_VAR).then(|| "https://planner.internal:9000/api/".to_string())
        })
        .unwrap();
        assert_eq!(config.api.base_url, "https://planner.internal:9000/api");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        let config = Config::from_lookup(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_rejects_garbage_and_non_http() {
        assert!(Config::from_lookup(|_| Some("not a url".to_string())).is_err());
        assert!(Config::from_lookup(|_| Some("ftp://host/".to_string())).is_err());
    }
}
