//! Configuration management for typeahead
//!
//! This module handles loading, validating and printing the TOML
//! configuration file.
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Longest accepted simulated fetch delay
pub const MAX_DELAY_MS: u64 = 60_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Candidate loader configuration
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Candidate loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// JSON file with candidates (None for the built-in country list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates_file: Option<PathBuf>,

    /// Simulated fetch delay in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

/// Display and output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Prompt label shown before the input line
    #[serde(default = "default_prompt_label")]
    pub prompt_label: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_delay_ms() -> u64 {
    1000
}

fn default_color_output() -> bool {
    true
}

fn default_prompt_label() -> String {
    "country".to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            candidates_file: None,
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: default_color_output(),
            prompt_label: default_prompt_label(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// With `None` the default path is used, and a missing default file
    /// yields the default configuration. An explicitly given path must exist.
    ///
    /// # Arguments
    /// * `path` - Optional path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - `~/.typeahead/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".typeahead")
            .join("config.toml")
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.loader.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "loader.delay_ms".to_string(),
                value: self.loader.delay_ms.to_string(),
            }
            .into());
        }

        if let Some(path) = &self.loader.candidates_file
            && path.as_os_str().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                field: "loader.candidates_file".to_string(),
                value: String::new(),
            }
            .into());
        }

        if self.display.prompt_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "display.prompt_label".to_string(),
                value: self.display.prompt_label.clone(),
            }
            .into());
        }

        Ok(())
    }

    /// Render the configuration as TOML with a comment per section
    pub fn to_toml_with_comments(&self) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Candidate loader\n");
        out.push_str("[loader]\n");
        out.push_str(&toml::to_string(&self.loader)?);
        out.push('\n');

        out.push_str("# Display settings\n");
        out.push_str("[display]\n");
        out.push_str(&toml::to_string(&self.display)?);
        out.push('\n');

        out.push_str("# Logging (error, warn, info, debug, trace)\n");
        out.push_str("[logging]\n");
        out.push_str(&toml::to_string(&self.logging)?);

        Ok(out)
    }
}

impl LoaderConfig {
    /// Get the simulated fetch delay as Duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeaheadError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.loader.delay_ms, 1000);
        assert!(config.loader.candidates_file.is_none());
        assert!(config.display.color_output);
        assert_eq!(config.display.prompt_label, "country");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [loader]
            delay_ms = 250

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.loader.delay(), Duration::from_millis(250));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.display.color_output);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml("[loader]\ndelay_ms = \"soon\"");
        assert!(matches!(
            result,
            Err(TypeaheadError::Config(ConfigError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_toml_with_comments_round_trip() {
        let mut config = Config::default();
        config.loader.candidates_file = Some(PathBuf::from("/tmp/countries.json"));
        config.display.color_output = false;

        let rendered = config.to_toml_with_comments().unwrap();
        assert!(rendered.contains("[loader]"));
        assert!(rendered.contains("# Display settings"));

        let parsed = Config::from_toml(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.loader.delay_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.display.prompt_label = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join(format!("missing-{}.toml", uuid::Uuid::new_v4()));
        let result = Config::load_from_file(Some(&path));
        assert!(matches!(
            result,
            Err(TypeaheadError::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
