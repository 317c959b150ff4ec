//! Configuration System using Figment
//!
//! Strongly-typed configuration for the sensor control plane. Values are layered
//! (lowest to highest precedence):
//! 1. Built-in defaults
//! 2. A TOML file (default: `config/imx091.toml`, optional)
//! 3. Environment variables prefixed with `IMX091_`
//!
//! # Environment Variable Overrides
//!
//! Nested keys are separated by a double underscore:
//!
//! ```text
//! IMX091_RETRY__MAX_RETRIES=5
//! IMX091_TABLE__WAIT_JITTER_US=0
//! IMX091_LOGGING__LEVEL=debug
//! ```
//!
//! # Example
//!
//! ```no_run
//! use imx091_ctl::config::SensorConfig;
//!
//! let config = SensorConfig::load()?;
//! println!("write attempts: {}", config.retry_policy().max_attempts());
//! # Ok::<(), imx091_ctl::config::ConfigError>(())
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::error_recovery::RetryPolicy;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "config/imx091.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed or a value has the wrong type.
    #[error("Configuration load error: {0}")]
    LoadError(#[from] figment::Error),
    /// Values parsed but are out of range.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SensorConfig {
    /// Register write retry settings
    #[serde(default)]
    pub retry: RetryConfig,
    /// Register table interpretation settings
    #[serde(default)]
    pub table: TableConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Write retry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between attempts in milliseconds
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    /// Random extra delay window in microseconds
    #[serde(default = "default_jitter_us")]
    pub jitter_us: u64,
}

/// Table interpretation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Random extra delay window added to each WAIT entry, in microseconds
    #[serde(default = "default_jitter_us")]
    pub wait_jitter_us: u64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_max_retries() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    3
}

fn default_jitter_us() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff_ms: default_backoff_ms(),
            jitter_us: default_jitter_us(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            wait_jitter_us: default_jitter_us(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================================================
// Configuration Loading and Validation
// ============================================================================

impl SensorConfig {
    /// Load from `config/imx091.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from a specific file path
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns a ConfigError if the file is malformed or validation fails.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(SensorConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("IMX091_").split("__"))
            .extract()
            .map_err(ConfigError::LoadError)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// Checks:
    /// - Log level is valid (trace, debug, info, warn, error)
    /// - Retry budget and backoff stay bounded
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        if self.retry.max_retries > 10 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid max_retries {}. Must be 0-10",
                self.retry.max_retries
            )));
        }

        if self.retry.backoff_ms > 1000 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid backoff_ms {}. Must be 0-1000",
                self.retry.backoff_ms
            )));
        }

        Ok(())
    }

    /// Retry policy for `RegisterWriter`.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.retry.max_retries,
            backoff_delay: Duration::from_millis(self.retry.backoff_ms),
            jitter: Duration::from_micros(self.retry.jitter_us),
        }
    }

    /// Jitter window for table WAIT entries.
    pub fn wait_jitter(&self) -> Duration {
        Duration::from_micros(self.table.wait_jitter_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SensorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert_eq!(config.wait_jitter(), Duration::from_micros(500));
    }

    #[test]
    #[serial]
    fn test_missing_file_uses_defaults() {
        let config = SensorConfig::load_from("does/not/exist.toml").unwrap();
        assert_eq!(config, SensorConfig::default());
    }

    #[test]
    #[serial]
    fn test_file_values_override_defaults() {
        let file = write_config(
            r#"
[retry]
max_retries = 5

[table]
wait_jitter_us = 0
"#,
        );
        let config = SensorConfig::load_from(file.path()).unwrap();

        assert_eq!(config.wait_jitter(), Duration::ZERO);
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.backoff_ms, 3);
        assert_eq!(config.retry_policy().max_attempts(), 6);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = write_config("[logging]\nlevel = \"warn\"\n");
        std::env::set_var("IMX091_LOGGING__LEVEL", "debug");
        let result = SensorConfig::load_from(file.path());
        std::env::remove_var("IMX091_LOGGING__LEVEL");

        assert_eq!(result.unwrap().logging.level, "debug");
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = SensorConfig::default();
        config.logging.level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_error_variant() {
        let mut config = SensorConfig::default();
        config.retry.max_retries = 50;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_unbounded_retry_rejected() {
        let mut config = SensorConfig::default();
        config.retry.max_retries = 11;
        assert!(config.validate().is_err());
        config.retry.max_retries = 3;
        config.retry.backoff_ms = 5000;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_load_error() {
        let file = write_config("[retry]\nmax_retries = \"many\"\n");
        assert!(matches!(
            SensorConfig::load_from(file.path()),
            Err(ConfigError::LoadError(_))
        ));
    }
}
