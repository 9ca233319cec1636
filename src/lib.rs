//! # Rust Field Logger
//!
//! A small leveled logger with contextual fields, text and JSON output, and
//! redaction of sensitive fields.
//!
//! ## Features
//!
//! - **Leveled**: `DEBUG < INFO < WARN < ERROR < FATAL`, filtered before any formatting
//! - **Field Chaining**: `with_field` derives a new logger without touching its parent
//! - **Redaction**: `password`, `token`, `credit_card` and `secret` never reach the output
//! - **Two Formats**: colored text lines or one JSON object per line
//! - **Default Instance**: free functions forward to a process-wide logger
//!
//! ```
//! use rust_field_logger::prelude::*;
//! use rust_field_logger::info;
//!
//! let sink = MemoryWriter::new();
//! let logger = Logger::new(sink.clone(), "", LogLevel::Info);
//! logger.set_colored(false);
//!
//! let request = logger.with_field("request_id", "r-42");
//! info!(request, "served {} bytes", 512);
//!
//! assert!(sink.contents().contains(r#"served 512 bytes request_id="r-42""#));
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{MemoryWriter, WriterAppender};
    pub use crate::core::{
        FieldValue, Fields, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, OutputFormat, OutputTarget, Result,
    };
}

pub use crate::appenders::{MemoryWriter, WriterAppender};
pub use crate::core::{
    is_sensitive_key, parse_level, ExitFn, FieldValue, Fields, LogLevel, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, OutputTarget, Rendered,
    Result, TimestampFormat, FATAL_EXIT_CODE, REDACTION_MARKER,
};
pub use crate::global::{
    debug, default_logger, error, fatal, info, set_colored, set_format, set_level, set_output,
    set_structured, warn, with_error, with_field, with_fields,
};
