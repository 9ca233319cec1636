//! Core logger types

pub mod config;
pub mod error;
pub mod fields;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod timestamp;

pub use config::{LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use fields::{is_sensitive_key, FieldValue, Fields, REDACTION_MARKER};
pub use log_entry::LogRecord;
pub use log_level::{parse_level, LogLevel};
pub use logger::{ExitFn, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use output_format::{OutputFormat, Rendered};
pub use timestamp::TimestampFormat;
