//! Application configuration management.
//!
//! The only setting the storefront needs is the API base URL. It is resolved
//! once at startup, in order: built-in default, then the config file at
//! `~/.config/storefront/config.json`, then the `STOREFRONT_API_URL`
//! environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Application name used for the config directory path
const APP_NAME: &str = "storefront";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Base URL of the bookstore backend when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/SadathBookstoreTransact/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// Per-request timeout. Unset means requests wait for the transport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load the config file and apply the environment override
    pub fn resolve() -> Result<Self> {
        let mut config = Self::load()?;
        config.override_api_url(std::env::var(API_URL_ENV).ok());
        debug!(api_base_url = %config.api_base_url, "Resolved configuration");
        Ok(config)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Load the config file, falling back to defaults if it can't be read.
    ///
    /// Used where a broken file must not block the caller, such as rewriting it.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %format!("{:#}", e), "Ignoring unreadable config file");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Set the API base URL after checking it is an absolute http(s) URL
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(url)
            .with_context(|| format!("Invalid API base URL: {:?}", url))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            anyhow::bail!("Invalid API base URL: {:?} (expected http:// or https://)", url);
        }
        self.api_base_url = url.to_string();
        Ok(())
    }

    /// Replace the base URL with a non-blank override
    pub fn override_api_url(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_file(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join(APP_NAME).join(CONFIG_FILE)
    }

    #[test]
    fn test_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&config_file(&dir)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir);
        let config = Config {
            api_base_url: "https://books.example.com/api".to_string(),
            request_timeout_secs: Some(10),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"request_timeout_secs": 3}"#).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout_secs, Some(3));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_or_default_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{\"api_base_url\": ").unwrap();

        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_set_api_url() {
        let mut config = Config::default();
        config.set_api_url(" https://books.example.com/api/ ").unwrap();
        assert_eq!(config.api_base_url, "https://books.example.com/api");

        for bad in ["", "/", "   ", "books.example.com/api", "ftp://books.example.com", "http://"] {
            assert!(config.set_api_url(bad).is_err(), "accepted {:?}", bad);
        }
        assert_eq!(config.api_base_url, "https://books.example.com/api");
    }

    #[test]
    fn test_override_api_url() {
        let mut config = Config::default();
        config.override_api_url(None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        config.override_api_url(Some("   ".to_string()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        config.override_api_url(Some(" http://127.0.0.1:9000/api ".to_string()));
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000/api");
    }
}
