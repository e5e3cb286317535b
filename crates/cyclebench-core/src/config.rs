// Rust guideline compliant 2026-10-15

//! Configuration management for cyclebench.

use crate::progress::DEFAULT_BAR_LENGTH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Largest accepted progress bar length.
pub const MAX_BAR_LENGTH: usize = 200;

/// Log levels accepted in configuration.
pub const LOG_LEVELS: [&str; 4] = ["error", "warn", "info", "debug"];

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Decorated report with headers and symbols.
    #[default]
    Table,
    /// Undecorated key/value report.
    Plain,
    /// Single JSON document.
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Configuration for cyclebench behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of cells in the progress bar.
    #[serde(default = "default_bar_length")]
    pub bar_length: usize,

    /// Label shown before the progress bar.
    #[serde(default = "default_label")]
    pub label: String,

    /// Cycle counts above this value require confirmation.
    #[serde(default = "default_confirm_threshold")]
    pub confirm_threshold: u64,

    /// Report output format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level for diagnostics.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_bar_length() -> usize {
    DEFAULT_BAR_LENGTH
}

fn default_label() -> String {
    "Processing".to_string()
}

fn default_confirm_threshold() -> u64 {
    1_000_000
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bar_length: default_bar_length(),
            label: default_label(),
            confirm_threshold: default_confirm_threshold(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, when given and present
    /// 3. Environment variables with `CYCLEBENCH_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with file values and environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path)?;
                debug!(path = %path.display(), "loaded config file");
                toml::from_str(&content)
                    .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?
            }
            Some(path) => {
                debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CYCLEBENCH_BAR_LENGTH` - Progress bar cells
    /// - `CYCLEBENCH_LABEL` - Progress bar label
    /// - `CYCLEBENCH_CONFIRM_THRESHOLD` - Confirmation threshold in cycles
    /// - `CYCLEBENCH_OUTPUT_FORMAT` - Output format (table/plain/json)
    /// - `CYCLEBENCH_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CYCLEBENCH_BAR_LENGTH") {
            self.bar_length = val.parse().map_err(|_| {
                Error::InvalidConfig("CYCLEBENCH_BAR_LENGTH must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("CYCLEBENCH_LABEL") {
            self.label = val;
        }

        if let Ok(val) = std::env::var("CYCLEBENCH_CONFIRM_THRESHOLD") {
            self.confirm_threshold = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "CYCLEBENCH_CONFIRM_THRESHOLD must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("CYCLEBENCH_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                Error::InvalidConfig(
                    "CYCLEBENCH_OUTPUT_FORMAT must be table, plain, or json".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("CYCLEBENCH_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - bar_length is outside 1..=200
    /// - confirm_threshold is zero
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.bar_length == 0 || self.bar_length > MAX_BAR_LENGTH {
            return Err(Error::InvalidConfig(format!(
                "bar_length must be 1-{}, got {}",
                MAX_BAR_LENGTH, self.bar_length
            )));
        }

        if self.confirm_threshold == 0 {
            return Err(Error::InvalidConfig(
                "confirm_threshold must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Renders the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 5] = [
        "CYCLEBENCH_BAR_LENGTH",
        "CYCLEBENCH_LABEL",
        "CYCLEBENCH_CONFIRM_THRESHOLD",
        "CYCLEBENCH_OUTPUT_FORMAT",
        "CYCLEBENCH_LOG_LEVEL",
    ];

    fn clean_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
        guard
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bar_length, 40);
        assert_eq!(config.label, "Processing");
        assert_eq!(config.confirm_threshold, 1_000_000);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_without_file() {
        let _guard = clean_env();
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let _guard = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(Some(&temp_dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cyclebench.toml");
        let content = r#"
bar_length = 20
label = "Crunching"
confirm_threshold = 5000
output_format = "json"
log_level = "debug"
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.bar_length, 20);
        assert_eq!(config.label, "Crunching");
        assert_eq!(config.confirm_threshold, 5000);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let _guard = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cyclebench.toml");
        std::fs::write(&config_path, "bar_length = 60").unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.bar_length, 60);
        assert_eq!(config.label, "Processing");
    }

    #[test]
    fn test_config_validation_zero_bar_length() {
        let _guard = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cyclebench.toml");
        std::fs::write(&config_path, "bar_length = 0").unwrap();

        let result = Config::load(Some(&config_path));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validation_unknown_log_level() {
        let config = Config {
            log_level: "verbose".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cyclebench.toml");
        std::fs::write(&config_path, "bar_length = [").unwrap();

        let result = Config::load(Some(&config_path));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_env_overrides_file() {
        let _guard = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cyclebench.toml");
        std::fs::write(&config_path, "bar_length = 20").unwrap();

        std::env::set_var("CYCLEBENCH_BAR_LENGTH", "30");
        std::env::set_var("CYCLEBENCH_OUTPUT_FORMAT", "plain");
        std::env::set_var("CYCLEBENCH_LOG_LEVEL", "INFO");
        let config = Config::load(Some(&config_path));
        for var in ENV_VARS {
            std::env::remove_var(var);
        }

        let config = config.unwrap();
        assert_eq!(config.bar_length, 30);
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = clean_env();

        std::env::set_var("CYCLEBENCH_CONFIRM_THRESHOLD", "lots");
        assert!(Config::load(None).is_err());
        std::env::remove_var("CYCLEBENCH_CONFIRM_THRESHOLD");

        std::env::set_var("CYCLEBENCH_OUTPUT_FORMAT", "yaml");
        assert!(Config::load(None).is_err());
        std::env::remove_var("CYCLEBENCH_OUTPUT_FORMAT");
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cyclebench.toml");

        let original = Config {
            bar_length: 25,
            label: "Saved".to_string(),
            confirm_threshold: 42,
            output_format: OutputFormat::Plain,
            log_level: "error".to_string(),
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(original, loaded);
    }
}
