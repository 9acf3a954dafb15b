//! Configuration for the familiar runtime
//!
//! Configuration is layered from:
//! - Default values
//! - A configuration file (TOML, JSON, YAML)
//! - `FAMILIAR`-prefixed environment variables

use crate::error::{FamiliarError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for a familiar process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamiliarConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cooldown gate settings
    #[serde(default)]
    pub cooldown: CooldownSettings,

    /// Nexus server bind settings
    #[serde(default)]
    pub server: ServerSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format
    #[serde(default)]
    pub json: bool,
}

/// Cooldown gate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooldownSettings {
    /// Minimum interval between two activations of the same familiar
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Base URL of the cooldown store service
    #[serde(default = "default_store_url")]
    pub store_url: String,
}

/// Nexus server bind settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_secs() -> u64 {
    60
}

fn default_store_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for CooldownSettings {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            store_url: default_store_url(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for FamiliarConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            cooldown: CooldownSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

/// Load configuration from a file
///
/// Supports TOML, JSON, and YAML formats based on file extension.
/// Environment variables with the `FAMILIAR` prefix override file values,
/// e.g. `FAMILIAR__COOLDOWN__WINDOW_SECS=90`.
///
/// # Example
///
/// ```no_run
/// use familiar_core::config::load_config;
///
/// let config = load_config("familiar.toml").unwrap();
/// println!("Cooldown window: {}s", config.cooldown.window_secs);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FamiliarConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FamiliarError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("FAMILIAR").separator("__"))
        .build()?;

    let config: FamiliarConfig = settings.try_deserialize()?;

    tracing::info!("Configuration loaded from {}", path.display());

    Ok(config)
}

/// Load configuration with defaults if the file doesn't exist
///
/// Useful for optional configuration files; env overrides still apply
/// through the defaults path being plain `Default`.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> FamiliarConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            FamiliarConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FamiliarConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.cooldown.window_secs, 60);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_serialization() {
        let config = FamiliarConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: FamiliarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.cooldown.store_url, deserialized.cooldown.store_url);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "logging": {
                "level": "debug",
                "json": true
            },
            "cooldown": {
                "window_secs": 90,
                "store_url": "http://nexus.local:9000"
            },
            "server": {
                "host": "127.0.0.1",
                "port": 9000
            }
        }"#;

        let config: FamiliarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.cooldown.window_secs, 90);
        assert_eq!(config.cooldown.store_url, "http://nexus.local:9000");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let json = r#"{
            "cooldown": {
                "window_secs": 30
            }
        }"#;

        let config: FamiliarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.cooldown.window_secs, 30);
        assert_eq!(config.cooldown.store_url, "http://127.0.0.1:8080");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default() {
        let config = load_config_or_default("nonexistent.toml");
        assert_eq!(config.cooldown.window_secs, 60);
    }
}
