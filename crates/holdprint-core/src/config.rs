//! `Holdprint` Configuration Module
//!
//! Provides configuration file support via `holdprint.toml`, environment
//! variables, and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (CLI flags, applied by the caller)
//! 2. Environment variables (`HOLDPRINT_*`, nested keys joined with `__`,
//!    e.g. `HOLDPRINT_SEARCH__TOP_K=5`)
//! 3. Configuration file (`holdprint.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::fusion::{DEFAULT_ORDER_WEIGHT, DEFAULT_SET_WEIGHT};
use crate::search::{SearchOptions, DEFAULT_MAX_DISTANCE, DEFAULT_TOP_K};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "holdprint.toml";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Search configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Set distance at which set similarity reaches 0.
    pub max_distance: f64,
    /// Weight of the set similarity.
    pub set_weight: f64,
    /// Weight of the order similarity.
    pub order_weight: f64,
    /// Number of results returned.
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            set_weight: DEFAULT_SET_WEIGHT,
            order_weight: DEFAULT_ORDER_WEIGHT,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl SearchConfig {
    /// Scoring options described by this section.
    #[must_use]
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            max_distance: self.max_distance,
            set_weight: self.set_weight,
            order_weight: self.order_weight,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
    /// Log format: text or json.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Main `Holdprint` configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HoldprintConfig {
    /// Search configuration.
    pub search: SearchConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl HoldprintConfig {
    /// Loads configuration from `path` (usually [`DEFAULT_CONFIG_FILE`]).
    ///
    /// Priority: defaults < file < environment variables.
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("HOLDPRINT_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// Weights are only required to be finite; their range is the caller's
    /// choice.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;

        if !search.max_distance.is_finite() || search.max_distance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "search.max_distance".to_string(),
                message: format!("value {} must be a finite number > 0", search.max_distance),
            });
        }

        for (key, weight) in [
            ("search.set_weight", search.set_weight),
            ("search.order_weight", search.order_weight),
        ] {
            if !weight.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("value {weight} must be finite"),
                });
            }
        }

        if search.top_k == 0 || search.top_k > 1000 {
            return Err(ConfigError::InvalidValue {
                key: "search.top_k".to_string(),
                message: format!("value {} is out of range [1, 1000]", search.top_k),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
