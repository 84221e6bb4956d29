//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Environment / CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$ITEMLINK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/itemlink/config.toml`
//! 3. `~/.itemlink/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use itemlink::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Host: {}", config.hostname());
//! println!("Endpoint: {}", config.graphql_endpoint(config.hostname()));
//! ```

pub mod schema;

pub use schema::{GlobalConfig, SecretsConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::forge::github::{graphql_endpoint, DEFAULT_HOST};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "ITEMLINK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path the config was loaded from, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. Missing files are not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_global() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// First existing config file in the search order.
    fn find_global() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("itemlink/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        Self::global_config_path().ok().filter(|p| p.exists())
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.itemlink/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".itemlink/config.toml"))
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the configured host.
    ///
    /// Defaults to "github.com" if not configured.
    pub fn hostname(&self) -> &str {
        self.global.hostname.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// GraphQL endpoint for `host`, honoring the `api_url` override.
    pub fn graphql_endpoint(&self, host: &str) -> String {
        self.global
            .api_url
            .clone()
            .unwrap_or_else(|| graphql_endpoint(host))
    }

    /// Get the secrets provider.
    ///
    /// Defaults to "file" if not configured.
    pub fn secrets_provider(&self) -> &str {
        self.global
            .secrets
            .as_ref()
            .and_then(|s| s.provider.as_deref())
            .unwrap_or("file")
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.hostname(), "github.com");
        assert_eq!(
            config.graphql_endpoint("github.com"),
            "https://api.github.com/graphql"
        );
        assert_eq!(config.secrets_provider(), "file");
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
            hostname = "ghe.example.com"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();

        assert_eq!(config.hostname(), "ghe.example.com");
        assert_eq!(
            config.graphql_endpoint(config.hostname()),
            "https://ghe.example.com/api/graphql"
        );
        assert_eq!(config.loaded_from(), Some(config_path.as_path()));
    }

    #[test]
    fn api_url_overrides_endpoint() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "api_url = \"http://127.0.0.1:9999/graphql\"").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.graphql_endpoint("github.com"),
            "http://127.0.0.1:9999/graphql"
        );
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "trunk = \"main\"").unwrap();

        let result = Config::load_from(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "hostname = \"https://github.com\"").unwrap();

        let result = Config::load_from(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
