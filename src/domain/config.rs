//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix connection, marketplace settings and logging.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    /// Inline secret. Prefer `password_env` outside of local testing.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_password_env")]
    pub password_env: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl MatrixConfig {
    /// The bot's login secret, from the config file or the environment.
    pub fn resolve_password(&self) -> Result<String> {
        if let Some(password) = self.password.as_ref().filter(|p| !p.is_empty()) {
            return Ok(password.clone());
        }
        std::env::var(&self.password_env)
            .ok()
            .filter(|p| !p.is_empty())
            .with_context(|| format!("Bot token missing: set {}", self.password_env))
    }
}

fn default_password_env() -> String {
    "BAZAAR_BOT_TOKEN".to_string()
}

/// Marketplace behaviour settings.
#[derive(Debug, Deserialize, Clone)]
pub struct MarketConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    #[serde(default)]
    pub max_ads_per_user: Option<usize>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            command_prefix: default_command_prefix(),
            max_ads_per_user: None,
        }
    }
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_command_prefix() -> String {
    "/".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

fn default_log_dir() -> String {
    "data".to_string()
}
fn default_log_file() -> String {
    "session.log".to_string()
}
fn default_log_filter() -> String {
    "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = "
services:
  matrix:
    homeserver: https://matrix.example.org
    username: bazaar
";

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.services.matrix.username, "bazaar");
        assert_eq!(config.services.matrix.password_env, "BAZAAR_BOT_TOKEN");
        assert_eq!(config.market.currency, "RUB");
        assert_eq!(config.market.command_prefix, "/");
        assert_eq!(config.market.max_ads_per_user, None);
        assert_eq!(config.logging.dir, "data");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{MINIMAL}market:\n  currency: EUR\n  max_ads_per_user: 3\n"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.market.currency, "EUR");
        assert_eq!(config.market.max_ads_per_user, Some(3));
        assert_eq!(config.market.command_prefix, "/");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(dir.path().join("nope.yaml")).is_err());
    }

    #[test]
    fn test_inline_password_wins() {
        let mut config = AppConfig::from_yaml(MINIMAL).unwrap();
        config.services.matrix.password = Some("secret".to_string());
        assert_eq!(config.services.matrix.resolve_password().unwrap(), "secret");
    }

    #[test]
    fn test_missing_password_is_an_error() {
        let mut config = AppConfig::from_yaml(MINIMAL).unwrap();
        config.services.matrix.password_env = "BAZAAR_TEST_UNSET_TOKEN_VAR".to_string();
        assert!(config.services.matrix.resolve_password().is_err());
    }
}
