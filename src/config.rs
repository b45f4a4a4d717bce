//! Configuration module for the board shell.
//!
//! Loads server settings from YAML files and environment variables, and the
//! backend options from `FIREBASE_*` environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::backend::FirebaseOptions;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Filled from the `FIREBASE_*` variables, not from the layered sources.
    #[serde(skip)]
    pub firebase: FirebaseOptions,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. `RUST_LOG` overrides this when set.
    pub filter: String,
    pub format: LogFormat,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for log collectors.
    Json,
    /// Multi-line human-readable output for local development.
    Pretty,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (BOARD__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("BOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;
        config.firebase = FirebaseOptions::from_env()?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: crate::logging::DEFAULT_FILTER.to_string(),
            format: LogFormat::Json,
        }
    }
}
