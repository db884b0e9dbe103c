//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// How the catalog store simulates network round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatencyMode {
    /// Per-operation delays, scaled by `latency_percent`.
    Simulated,
    /// Every store call resolves immediately.
    Disabled,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub latency_mode: LatencyMode,
    pub latency_percent: u32,
    pub seed_catalog: bool,
    pub allowed_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let allowed_origin =
            lookup("ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string());

        // --- Catalog Settings ---
        let latency_mode = match lookup("CATALOG_LATENCY")
            .unwrap_or_else(|| "simulated".to_string())
            .to_lowercase()
            .as_str()
        {
            "simulated" => LatencyMode::Simulated,
            "none" | "off" => LatencyMode::Disabled,
            other => {
                return Err(ConfigError::InvalidValue(
                    "CATALOG_LATENCY".to_string(),
                    format!("'{}' is not one of simulated, none", other),
                ))
            }
        };

        let latency_percent = match lookup("CATALOG_LATENCY_PERCENT") {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::InvalidValue("CATALOG_LATENCY_PERCENT".to_string(), e.to_string())
            })?,
            None => 100,
        };

        let seed_catalog = match lookup("CATALOG_SEED") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "CATALOG_SEED".to_string(),
                    format!("'{}' is not a boolean", raw),
                )
            })?,
            None => true,
        };

        Ok(Self {
            bind_address,
            log_level,
            latency_mode,
            latency_percent,
            seed_catalog,
            allowed_origin,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.latency_mode, LatencyMode::Simulated);
        assert_eq!(config.latency_percent, 100);
        assert!(config.seed_catalog);
    }

    #[test]
    fn catalog_settings_are_read() {
        let config = config_from(&[
            ("CATALOG_LATENCY", "None"),
            ("CATALOG_LATENCY_PERCENT", "25"),
            ("CATALOG_SEED", "no"),
        ])
        .unwrap();
        assert_eq!(config.latency_mode, LatencyMode::Disabled);
        assert_eq!(config.latency_percent, 25);
        assert!(!config.seed_catalog);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("CATALOG_LATENCY", "sometimes")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "CATALOG_LATENCY"
        ));
        assert!(matches!(
            config_from(&[("BIND_ADDRESS", "not-an-address")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "BIND_ADDRESS"
        ));
        assert!(matches!(
            config_from(&[("CATALOG_SEED", "maybe")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "CATALOG_SEED"
        ));
    }
}
