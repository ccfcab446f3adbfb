//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::logging::DEFAULT_LOGGER_NAME;
use crate::numbers_api::{DEFAULT_BASE_URL, DEFAULT_FACT_NUMBER, DEFAULT_TIMEOUT_SECONDS};
use factcount_application::{CountConfig, DEFAULT_OPERATION_NAME};
use factcount_domain::{CountMode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("logger_name cannot be empty")]
    EmptyLoggerName,

    #[error("log path cannot be empty while logging is enabled")]
    EmptyLogPath,
}

/// Raw fact source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFactConfig {
    /// Base URL of the numbers API
    pub base_url: String,
    /// Number whose fact is fetched
    pub number: u64,
    /// Timeout in seconds for the fact request
    pub timeout_seconds: u64,
}

impl Default for FileFactConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            number: DEFAULT_FACT_NUMBER,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl FileFactConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw counting configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCountingConfig {
    /// Counting mode (uses domain type)
    pub mode: CountMode,
    /// Operation name written to the diagnostic log
    pub operation_name: String,
}

impl Default for FileCountingConfig {
    fn default() -> Self {
        Self {
            mode: CountMode::default(),
            operation_name: DEFAULT_OPERATION_NAME.to_string(),
        }
    }
}

/// Raw diagnostic log configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write failures to the diagnostic log
    pub enabled: bool,
    /// Path of the diagnostic log file
    pub path: String,
    /// Logger name written into every line
    pub logger_name: String,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: format!("{}.log", DEFAULT_LOGGER_NAME),
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
        }
    }
}

impl FileLogConfig {
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub fact: FileFactConfig,
    pub counting: FileCountingConfig,
    pub log: FileLogConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.fact.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.fact.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.log.enabled {
            if self.log.logger_name.trim().is_empty() {
                return Err(ConfigValidationError::EmptyLoggerName);
            }
            if self.log.path.trim().is_empty() {
                return Err(ConfigValidationError::EmptyLogPath);
            }
        }

        Ok(())
    }

    /// Use case configuration derived from the `[counting]` table
    pub fn count_config(&self) -> CountConfig {
        CountConfig::default()
            .with_mode(self.counting.mode)
            .with_operation_name(self.counting.operation_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[fact]
base_url = "http://localhost:8080"
number = 42
timeout_seconds = 3

[counting]
mode = "substring"
operation_name = "count_word_in_interest_fact"

[log]
enabled = true
path = "logs/diag.log"
logger_name = "FactLogger"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fact.base_url, "http://localhost:8080");
        assert_eq!(config.fact.number, 42);
        assert_eq!(config.fact.timeout(), Duration::from_secs(3));
        assert_eq!(config.counting.mode, CountMode::Substring);
        assert_eq!(config.log.path(), PathBuf::from("logs/diag.log"));
        assert_eq!(config.log.logger_name, "FactLogger");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[fact]
number = 7
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fact.number, 7);
        // Defaults should apply
        assert_eq!(config.fact.base_url, "http://numbersapi.com");
        assert_eq!(config.fact.timeout_seconds, 10);
        assert_eq!(config.counting.mode, CountMode::Token);
        assert!(config.log.enabled);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.fact.number, 34);
        assert_eq!(config.log.path, "JustMyLogger.log");
        assert_eq!(config.log.logger_name, "JustMyLogger");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[fact]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_empty_logger_name() {
        let mut config = FileConfig::default();
        config.log.logger_name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyLoggerName)
        ));

        // Irrelevant once logging is off
        config.log.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = FileConfig::default();
        config.fact.base_url = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyBaseUrl)
        ));
    }

    #[test]
    fn test_count_config_from_file() {
        let mut config = FileConfig::default();
        config.counting.mode = CountMode::Substring;

        let count_config = config.count_config();
        assert_eq!(count_config.mode, CountMode::Substring);
        assert_eq!(count_config.operation_name, "count_occurrences");
    }
}
