//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use daily_core::calendar::{default_epoch, DailyCalendar};
use daily_core::seed::SeedEncoding;
use daily_core::types::Date;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the epoch (YYYY-MM-DD).
pub const ENV_EPOCH: &str = "DAILY_EPOCH";
/// Environment variable overriding the seed encoding.
pub const ENV_SEED_ENCODING: &str = "DAILY_SEED_ENCODING";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "DAILY_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Invalid seed encoding: {0}. Must be one of: unpadded, zero-padded")]
    InvalidSeedEncoding(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DailyConfig {
    /// First puzzle date (day 1)
    pub epoch: Date,
    /// Digit layout of the daily seed
    pub seed_encoding: SeedEncoding,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            seed_encoding: SeedEncoding::Unpadded,
            log_level: LogLevel::Warn,
        }
    }
}

impl DailyConfig {
    /// Create a new DailyConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DailyConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply overrides from environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup` (keys are the `DAILY_*` names)
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(epoch) = lookup(ENV_EPOCH) {
            self.epoch = parse_epoch(&epoch)?;
        }
        if let Some(encoding) = lookup(ENV_SEED_ENCODING) {
            self.seed_encoding = parse_seed_encoding(&encoding)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(epoch) = &cli.epoch {
            self.epoch = parse_epoch(epoch)?;
        }
        if let Some(encoding) = &cli.seed_encoding {
            self.seed_encoding = parse_seed_encoding(encoding)?;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Day numbers are i64 and the epoch must leave room on both sides.
        if self.epoch.add_days(1).is_err() || self.epoch.add_days(-1).is_err() {
            return Err(ConfigError::InvalidEpoch(self.epoch.to_string()));
        }
        Ok(())
    }

    /// Build the calendar described by this configuration
    pub fn calendar(&self) -> DailyCalendar {
        DailyCalendar::new(self.epoch).with_seed_encoding(self.seed_encoding)
    }
}

fn parse_epoch(s: &str) -> Result<Date, ConfigError> {
    Date::parse(s).map_err(|e| ConfigError::InvalidEpoch(e.to_string()))
}

fn parse_seed_encoding(s: &str) -> Result<SeedEncoding, ConfigError> {
    SeedEncoding::from_str(s).map_err(|_| ConfigError::InvalidSeedEncoding(s.to_string()))
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Epoch override
    pub epoch: Option<String>,
    /// Seed encoding override
    pub seed_encoding: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose flag (forces debug logging)
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<DailyConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<DailyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => DailyConfig::from_file(path)?,
        None => DailyConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
