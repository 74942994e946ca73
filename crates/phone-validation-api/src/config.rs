//! Configuration for the validation API.

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Shared secret the RapidAPI proxy sends in `X-RapidAPI-Proxy-Secret`.
    ///
    /// Read from `RAPIDAPI_PROXY_SECRET`. Left unset, the service still starts
    /// but every `/validate` call fails as misconfigured.
    #[serde(default)]
    pub rapidapi_proxy_secret: Option<SecretString>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    fn from_environment(source: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(source.separator("__").try_parsing(false))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Whether a usable proxy secret is configured.
    pub fn has_proxy_secret(&self) -> bool {
        self.rapidapi_proxy_secret
            .as_ref()
            .is_some_and(|s| !s.expose_secret().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_environment(config::Environment::default().source(Some(map))).unwrap()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_from(&[]);

        assert!(config.rapidapi_proxy_secret.is_none());
        assert!(!config.has_proxy_secret());
        assert_eq!(config.server.listen_addr, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_secret_and_nested_settings() {
        let config = load_from(&[
            ("RAPIDAPI_PROXY_SECRET", "s3cr3t"),
            ("SERVER__PORT", "8080"),
            ("LOG__LEVEL", "debug"),
            ("LOG__JSON", "true"),
        ]);

        assert!(config.has_proxy_secret());
        assert_eq!(
            config.rapidapi_proxy_secret.unwrap().expose_secret(),
            "s3cr3t"
        );
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
    }

    #[test]
    fn test_empty_secret_is_not_usable() {
        let config = load_from(&[("RAPIDAPI_PROXY_SECRET", "")]);
        assert!(!config.has_proxy_secret());
    }

    #[test]
    fn test_secret_is_redacted_in_debug() {
        let config = load_from(&[("RAPIDAPI_PROXY_SECRET", "do-not-print")]);
        assert!(!format!("{:?}", config).contains("do-not-print"));
    }
}
