//! Per-call log record

use super::fields::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// A single log call, alive only while it is rendered
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub message: &'a str,
    pub fields: &'a Fields,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: LogLevel, message: &'a str, fields: &'a Fields) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            message,
            fields,
        }
    }

    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Escape line breaks and tabs so a message stays on a single line
pub(crate) fn sanitize_message(message: &str) -> std::borrow::Cow<'_, str> {
    if message.contains(['\n', '\r', '\t']) {
        std::borrow::Cow::Owned(
            message
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t"),
        )
    } else {
        std::borrow::Cow::Borrowed(message)
    }
}
