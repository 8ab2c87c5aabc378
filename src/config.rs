//! Configuration management for the registry.
//!
//! This module handles loading and validating configuration from
//! environment variables. The console UI owns stdout, so nothing here
//! prints; failures surface as typed errors.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the registry process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Preload the three demo records at startup (default: false)
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `REGISTRY_LOG_LEVEL`: Logging level (default: "error")
    /// - `REGISTRY_SEED_DEMO`: Preload demo records (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("REGISTRY_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let seed_demo = Self::parse_env_bool("REGISTRY_SEED_DEMO", false)?;

        Ok(Config {
            log_level,
            seed_demo,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a boolean, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            seed_demo: false,
        }
    }
}
