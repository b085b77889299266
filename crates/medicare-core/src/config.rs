//! Runtime configuration.
//!
//! Everything has a default; `Config::from_env` lets the environment override
//! the defaults without a config file.

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "MediCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable toggling the initial dataset.
pub const SEED_ENV: &str = "MEDICARE_SEED";
/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "MEDICARE_LOG";

/// Filter used when `MEDICARE_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medicare_core=info,medicare=info"
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Store and logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Load the fixed initial dataset into a fresh store
    pub seed: bool,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: true,
            log_filter: default_log_filter().to_string(),
        }
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_ENV) {
            config.seed = parse_flag(SEED_ENV, &value)?;
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.seed);
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (SEED_ENV, "off"),
            (LOG_ENV, "medicare_core=debug"),
        ]))
        .unwrap();
        assert!(!config.seed);
        assert_eq!(config.log_filter, "medicare_core=debug");
    }

    #[test]
    fn test_blank_log_filter_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[(LOG_ENV, "  ")])).unwrap();
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn test_invalid_seed_flag() {
        let err = Config::from_lookup(lookup_from(&[(SEED_ENV, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: SEED_ENV.into(),
                value: "maybe".into()
            }
        );
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "MediCare");
    }
}
