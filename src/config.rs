//! Configuration management for the trip wizard
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripWizardError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the trip wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripWizardConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Session storage configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// Simulated loading progress
    #[serde(default)]
    pub loading: LoadingConfig,
    /// Default planning settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Session storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory of the session database
    #[serde(default = "default_session_storage_path")]
    pub storage_path: String,
    /// Key the session is stored under
    #[serde(default = "default_session_key")]
    pub key: String,
}

/// Simulated loading progress settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingConfig {
    /// Interval between progress updates in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Delay after reaching 100% in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Smallest progress step per tick (percent)
    #[serde(default = "default_min_step")]
    pub min_step: u32,
    /// Largest progress step per tick (percent, exclusive)
    #[serde(default = "default_max_step")]
    pub max_step: u32,
}

/// Default planning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Trip length in days when the form has no dates
    #[serde(default = "default_trip_length_days")]
    pub trip_length_days: u32,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_session_storage_path() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("tripwizard").join("session"))
        .unwrap_or_else(|| PathBuf::from(".tripwizard/session"))
        .to_string_lossy()
        .into_owned()
}

fn default_session_key() -> String {
    "itin-trip-storage".to_string()
}

fn default_tick_ms() -> u64 {
    200
}

fn default_settle_ms() -> u64 {
    300
}

fn default_min_step() -> u32 {
    5
}

fn default_max_step() -> u32 {
    20
}

fn default_trip_length_days() -> u32 {
    4
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: default_session_storage_path(),
            key: default_session_key(),
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            settle_ms: default_settle_ms(),
            min_step: default_min_step(),
            max_step: default_max_step(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            trip_length_days: default_trip_length_days(),
        }
    }
}

impl TripWizardConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides: TRIPWIZARD_SESSION__STORAGE_PATH=...
        builder = builder.add_source(
            Environment::with_prefix("TRIPWIZARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripWizardConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripwizard").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.session.storage_path.is_empty() {
            self.session.storage_path = default_session_storage_path();
        }
        if self.session.key.is_empty() {
            self.session.key = default_session_key();
        }
        if self.defaults.trip_length_days == 0 {
            self.defaults.trip_length_days = default_trip_length_days();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.loading.tick_ms > 5000 {
            return Err(TripWizardError::config("Loading tick cannot exceed 5000 ms").into());
        }

        if self.loading.settle_ms > 10_000 {
            return Err(
                TripWizardError::config("Loading settle delay cannot exceed 10000 ms").into(),
            );
        }

        if self.loading.min_step == 0
            || self.loading.min_step >= self.loading.max_step
            || self.loading.max_step > 100
        {
            return Err(TripWizardError::config(format!(
                "Loading steps must satisfy 1 <= min_step < max_step <= 100, got {}..{}",
                self.loading.min_step, self.loading.max_step
            ))
            .into());
        }

        if !(1..=60).contains(&self.defaults.trip_length_days) {
            return Err(TripWizardError::config(
                "Default trip length must be between 1 and 60 days",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripWizardError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripWizardError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TripWizardConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.session.key, "itin-trip-storage");
        assert_eq!(config.loading.tick_ms, 200);
        assert_eq!(config.loading.settle_ms, 300);
        assert_eq!(config.defaults.trip_length_days, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripWizardConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = TripWizardConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_loading_steps() {
        let mut config = TripWizardConfig::default();
        config.loading.min_step = 30;
        config.loading.max_step = 30;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("min_step < max_step"));
    }

    #[test]
    fn test_config_validation_trip_length() {
        let mut config = TripWizardConfig::default();
        config.defaults.trip_length_days = 90;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = TripWizardConfig::default();
        config.session.key = String::new();
        config.defaults.trip_length_days = 0;
        config.apply_defaults();
        assert_eq!(config.session.key, "itin-trip-storage");
        assert_eq!(config.defaults.trip_length_days, 4);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[loading]\ntick_ms = 50\n\n[session]\nkey = \"custom-key\""
        )
        .unwrap();

        let config = TripWizardConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.loading.tick_ms, 50);
        assert_eq!(config.loading.settle_ms, 300);
        assert_eq!(config.session.key, "custom-key");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            TripWizardConfig::load_from_path(Some(PathBuf::from("/nonexistent/tripwizard.toml")))
                .unwrap();
        assert_eq!(config.defaults.trip_length_days, 4);
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripWizardConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripwizard"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
