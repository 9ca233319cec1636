//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// All levels in ascending severity
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Position in the severity order. Only meaningful for comparison.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_ordinal(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            _ => LogLevel::Fatal,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Cyan,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => Magenta,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LoggerError::unknown_level(s))
    }
}

/// Parse a level name, ignoring case.
///
/// ```
/// use rust_field_logger::{parse_level, LogLevel};
///
/// assert_eq!(parse_level("warn").unwrap(), LogLevel::Warn);
/// assert!(parse_level("verbose").is_err());
/// ```
pub fn parse_level(name: &str) -> Result<LogLevel, LoggerError> {
    name.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_total() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_level("info").unwrap(), LogLevel::Info);
        assert_eq!(parse_level("Error").unwrap(), LogLevel::Error);
        assert_eq!(parse_level("FATAL").unwrap(), LogLevel::Fatal);
    }

    #[test]
    fn test_parse_unknown_names_the_input() {
        match parse_level("bogus") {
            Err(LoggerError::UnknownLevel { input }) => assert_eq!(input, "bogus"),
            other => panic!("expected UnknownLevel, got {:?}", other),
        }
        // No aliases: only canonical names are accepted
        assert!(parse_level("warning").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn test_ordinal_roundtrip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_ordinal(level.ordinal()), level);
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"WARN\"");
        let level: LogLevel = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(level, LogLevel::Error);
    }
}
