//! Process-wide default logger
//!
//! The default logger writes to standard output with no prefix at `Debug`
//! level. It is built on first use, so these functions can be called from
//! any thread without an initialization step.

use crate::core::{FieldValue, LogLevel, Logger, OutputFormat};
use std::fmt;
use std::io::{self, Write};
use std::sync::LazyLock;

static DEFAULT_LOGGER: LazyLock<Logger> =
    LazyLock::new(|| Logger::new(io::stdout(), "", LogLevel::Debug));

/// The process-wide logger behind the free functions of this module
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

pub fn debug(message: impl fmt::Display) {
    DEFAULT_LOGGER.debug(message);
}

pub fn info(message: impl fmt::Display) {
    DEFAULT_LOGGER.info(message);
}

pub fn warn(message: impl fmt::Display) {
    DEFAULT_LOGGER.warn(message);
}

pub fn error(message: impl fmt::Display) {
    DEFAULT_LOGGER.error(message);
}

/// Write a fatal record through the default logger, then exit with status 1
pub fn fatal(message: impl fmt::Display) -> ! {
    DEFAULT_LOGGER.fatal(message)
}

pub fn set_level(level: LogLevel) {
    DEFAULT_LOGGER.set_level(level);
}

pub fn set_output<W>(sink: W)
where
    W: Write + Send + 'static,
{
    DEFAULT_LOGGER.set_output(sink);
}

pub fn set_colored(colored: bool) {
    DEFAULT_LOGGER.set_colored(colored);
}

pub fn set_structured(structured: bool) {
    DEFAULT_LOGGER.set_structured(structured);
}

pub fn set_format(format: OutputFormat) {
    DEFAULT_LOGGER.set_format(format);
}

pub fn with_field<K, V>(key: K, value: V) -> Logger
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    DEFAULT_LOGGER.with_field(key, value)
}

pub fn with_fields<I, K, V>(fields: I) -> Logger
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    DEFAULT_LOGGER.with_fields(fields)
}

pub fn with_error<E>(err: &E) -> Logger
where
    E: std::error::Error + ?Sized,
{
    DEFAULT_LOGGER.with_error(err)
}
