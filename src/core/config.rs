//! Declarative logger configuration
//!
//! [`LoggerConfig`] describes the initial state of a logger and can be read
//! from JSON or from `LOG_*` environment variables. It either builds a new
//! logger or reconfigures an existing one, such as the process-wide default.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::output_format::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

pub const ENV_LEVEL: &str = "LOG_LEVEL";
pub const ENV_FORMAT: &str = "LOG_FORMAT";
pub const ENV_COLOR: &str = "LOG_COLOR";
pub const ENV_PREFIX: &str = "LOG_PREFIX";
pub const ENV_OUTPUT: &str = "LOG_OUTPUT";

/// Where rendered lines go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    /// Append to a file, creating it if needed
    File(PathBuf),
}

impl OutputTarget {
    /// Parse `stdout`, `stderr`, or anything else as a file path
    pub fn parse(value: &str) -> Self {
        match value {
            "stdout" | "-" => OutputTarget::Stdout,
            "stderr" => OutputTarget::Stderr,
            path => OutputTarget::File(PathBuf::from(path)),
        }
    }

    pub fn open(&self) -> Result<Box<dyn Write + Send>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout())),
            OutputTarget::Stderr => Ok(Box::new(io::stderr())),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        LoggerError::io_operation(format!("opening {}", path.display()), e)
                    })?;
                Ok(Box::new(file))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub prefix: String,
    pub colored: bool,
    pub format: OutputFormat,
    pub output: OutputTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            prefix: String::new(),
            colored: true,
            format: OutputFormat::Text,
            output: OutputTarget::Stdout,
        }
    }
}

impl LoggerConfig {
    /// Parse a JSON document; missing keys take their defaults
    ///
    /// ```
    /// use rust_field_logger::{LogLevel, LoggerConfig, OutputFormat};
    ///
    /// let config = LoggerConfig::from_json(r#"{"level": "WARN", "format": "json"}"#).unwrap();
    /// assert_eq!(config.level, LogLevel::Warn);
    /// assert_eq!(config.format, OutputFormat::Json);
    /// assert!(config.colored);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read `LOG_LEVEL`, `LOG_FORMAT`, `LOG_COLOR`, `LOG_PREFIX` and `LOG_OUTPUT`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LEVEL) {
            config.level = level.trim().parse()?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.trim().parse()?;
        }
        if let Some(color) = lookup(ENV_COLOR) {
            config.colored = parse_flag(ENV_COLOR, color.trim())?;
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            config.prefix = prefix;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = OutputTarget::parse(output.trim());
        }

        Ok(config)
    }

    pub fn build(&self) -> Result<Logger> {
        let sink = self.output.open()?;
        Ok(Logger::builder()
            .output(sink)
            .prefix(self.prefix.clone())
            .level(self.level)
            .colored(self.colored)
            .format(self.format)
            .build())
    }

    /// Reconfigure an existing logger in one step. Its prefix is left unchanged.
    ///
    /// Concurrent calls on `logger` render with either the old or the new
    /// sink, color flag and format, never a mix of the two.
    pub fn apply(&self, logger: &Logger) -> Result<()> {
        let sink = self.output.open()?;
        logger.reconfigure(sink, self.level, self.colored, self.format);
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::config(
            key,
            format!("expected a boolean, got '{}'", value),
        )),
    }
}
