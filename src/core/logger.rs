//! Main logger implementation
//!
//! A [`Logger`] owns its threshold, output adapter, color flag, output format
//! and field set. Setters and every render+write run inside one mutex per
//! logger; the level gate reads an atomic copy of the threshold before taking
//! that mutex, so filtered calls never lock or format.

use super::{
    fields::{resolve_display, FieldValue, Fields},
    error::Result,
    log_entry::LogRecord,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_format::{render, OutputFormat},
};
use crate::appenders::WriterAppender;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Exit status used after a fatal record has been written
pub const FATAL_EXIT_CODE: i32 = 1;

/// Process termination invoked after a fatal record. It cannot return.
pub type ExitFn = fn(i32) -> !;

fn exit_process(code: i32) -> ! {
    std::process::exit(code)
}

type SharedAppender = Arc<Mutex<WriterAppender>>;

struct LoggerState {
    appender: SharedAppender,
    colored: bool,
    format: OutputFormat,
}

pub struct Logger {
    /// Threshold copy read without locking by the level gate
    level: AtomicU8,
    state: Mutex<LoggerState>,
    fields: Fields,
    metrics: Arc<LoggerMetrics>,
    exit: ExitFn,
}

impl Logger {
    /// Create a logger writing to `sink`, with colors on and text output
    ///
    /// # Example
    ///
    /// ```
    /// use rust_field_logger::{LogLevel, Logger};
    ///
    /// let logger = Logger::new(std::io::stderr(), "worker ", LogLevel::Info);
    /// logger.debug("filtered out");
    /// logger.info("written to stderr");
    /// ```
    pub fn new<W>(sink: W, prefix: impl Into<String>, level: LogLevel) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_parts(
            WriterAppender::new(sink, prefix),
            level,
            true,
            OutputFormat::Text,
            exit_process,
        )
    }

    fn from_parts(
        appender: WriterAppender,
        level: LogLevel,
        colored: bool,
        format: OutputFormat,
        exit: ExitFn,
    ) -> Self {
        Self {
            level: AtomicU8::new(level.ordinal()),
            state: Mutex::new(LoggerState {
                appender: Arc::new(Mutex::new(appender)),
                colored,
                format,
            }),
            fields: Fields::new(),
            metrics: Arc::new(LoggerMetrics::new()),
            exit,
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        let _state = self.state.lock();
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_ordinal(self.level.load(Ordering::Relaxed))
    }

    /// Whether a call at `level` passes the current threshold
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.ordinal() >= self.level.load(Ordering::Relaxed)
    }

    pub fn set_colored(&self, colored: bool) {
        self.state.lock().colored = colored;
    }

    pub fn is_colored(&self) -> bool {
        self.state.lock().colored
    }

    /// Switch between JSON (`true`) and text (`false`) output
    pub fn set_structured(&self, structured: bool) {
        let format = if structured {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        self.set_format(format);
    }

    pub fn is_structured(&self) -> bool {
        self.format().is_structured()
    }

    pub fn set_format(&self, format: OutputFormat) {
        self.state.lock().format = format;
    }

    pub fn format(&self) -> OutputFormat {
        self.state.lock().format
    }

    /// Redirect output to `sink`, keeping the current prefix
    ///
    /// Loggers previously derived with [`Logger::with_field`] keep writing to
    /// the old sink.
    pub fn set_output<W>(&self, sink: W)
    where
        W: Write + Send + 'static,
    {
        let mut state = self.state.lock();
        let prefix = state.appender.lock().prefix().to_string();
        state.appender = Arc::new(Mutex::new(WriterAppender::new(sink, prefix)));
    }

    /// Swap sink, level, color flag and format under one lock
    ///
    /// A concurrent call renders either entirely with the old configuration
    /// or entirely with the new one. The prefix is kept.
    pub fn reconfigure<W>(&self, sink: W, level: LogLevel, colored: bool, format: OutputFormat)
    where
        W: Write + Send + 'static,
    {
        let mut state = self.state.lock();
        let prefix = state.appender.lock().prefix().to_string();
        state.appender = Arc::new(Mutex::new(WriterAppender::new(sink, prefix)));
        state.colored = colored;
        state.format = format;
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn prefix(&self) -> String {
        self.state.lock().appender.lock().prefix().to_string()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Counters shared with every logger derived from this one
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Derive a logger carrying one more field
    ///
    /// The new logger snapshots this logger's level, color flag and format,
    /// shares its sink, and holds its own copy of the fields.
    ///
    /// ```
    /// use rust_field_logger::{LogLevel, Logger, MemoryWriter};
    ///
    /// let sink = MemoryWriter::new();
    /// let logger = Logger::new(sink.clone(), "", LogLevel::Info);
    /// logger.set_colored(false);
    ///
    /// logger.with_field("password", "hunter2").info("login attempt");
    ///
    /// let out = sink.contents();
    /// assert!(out.contains(r#"password="[FILTERED]""#));
    /// assert!(!out.contains("hunter2"));
    /// ```
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.derive(self.fields.with_field(key, value))
    }

    /// Derive a logger carrying every field in `fields`
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.derive(self.fields.with_fields(fields))
    }

    /// Derive a logger with the error's message under the `error` key
    #[must_use]
    pub fn with_error<E>(&self, err: &E) -> Logger
    where
        E: std::error::Error + ?Sized,
    {
        self.with_field("error", FieldValue::error(err))
    }

    fn derive(&self, fields: Fields) -> Logger {
        let state = self.state.lock();
        Logger {
            level: AtomicU8::new(self.level.load(Ordering::Relaxed)),
            state: Mutex::new(LoggerState {
                appender: Arc::clone(&state.appender),
                colored: state.colored,
                format: state.format,
            }),
            fields,
            metrics: Arc::clone(&self.metrics),
            exit: self.exit,
        }
    }

    /// Render and write one record at `level`
    ///
    /// Never fails: write errors are counted in [`Logger::metrics`] and
    /// records JSON cannot carry are written as text. A `Fatal` record
    /// terminates the process once written.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }

        {
            let state = self.state.lock();
            let message = resolve_display(&message);
            let record = LogRecord::new(level, &message, &self.fields);
            let rendered = render(&record, state.format, state.colored);
            if rendered.fell_back {
                self.metrics.record_structured_fallback();
            }

            let result = state.appender.lock().append(&rendered.line);
            match result {
                Ok(()) => {
                    self.metrics.record_written();
                }
                Err(_) => {
                    self.metrics.record_dropped();
                }
            }
        }

        if level == LogLevel::Fatal {
            (self.exit)(FATAL_EXIT_CODE);
        }
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Write a fatal record, then terminate the process with status 1
    ///
    /// Use [`Logger::error`] when the caller must keep running.
    #[inline]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(LogLevel::Fatal, message);
        // Only reached if the threshold is above Fatal, which no level allows
        (self.exit)(FATAL_EXIT_CODE)
    }

    pub fn flush(&self) -> Result<()> {
        let state = self.state.lock();
        let result = state.appender.lock().flush();
        result
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("colored", &state.colored)
            .field("format", &state.format)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_field_logger::prelude::*;
///
/// let sink = MemoryWriter::new();
/// let logger = Logger::builder()
///     .output(sink.clone())
///     .prefix("api ")
///     .level(LogLevel::Warn)
///     .colored(false)
///     .structured(true)
///     .build();
///
/// logger.warn("disk almost full");
/// assert!(sink.contents().starts_with("api {"));
/// ```
pub struct LoggerBuilder {
    output: Option<Box<dyn Write + Send>>,
    prefix: String,
    level: LogLevel,
    colored: bool,
    format: OutputFormat,
    exit: ExitFn,
}

impl LoggerBuilder {
    /// Create a builder: stdout, no prefix, Debug, colored text output
    pub fn new() -> Self {
        Self {
            output: None,
            prefix: String::new(),
            level: LogLevel::Debug,
            colored: true,
            format: OutputFormat::Text,
            exit: exit_process,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.output = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn structured(mut self, structured: bool) -> Self {
        self.format = if structured {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the termination function called after a fatal record
    ///
    /// Defaults to [`std::process::exit`].
    #[must_use = "builder methods return a new value"]
    pub fn exit_with(mut self, exit: ExitFn) -> Self {
        self.exit = exit;
        self
    }

    pub fn build(self) -> Logger {
        let appender = match self.output {
            Some(sink) => WriterAppender::new(sink, self.prefix),
            None => WriterAppender::new(std::io::stdout(), self.prefix),
        };
        Logger::from_parts(appender, self.level, self.colored, self.format, self.exit)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
