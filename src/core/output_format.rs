//! Rendering of log records
//!
//! Two output forms are supported:
//! - Text: `[INFO]  2025.01.08 10:30:45.123 Request processed user="alice"`
//! - Json: `{"level":"INFO","message":"Request processed","timestamp":"2025-01-08T10:30:45.123456789+00:00","user":"alice"}`
//!
//! Rendering is pure: it never touches logger state or the sink.

use super::error::Result;
use super::fields::Fields;
use super::log_entry::{sanitize_message, LogRecord};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Keys owned by the record itself in JSON output
pub const RESERVED_KEYS: [&str; 3] = ["timestamp", "level", "message"];

/// Prefix given to field keys that collide with [`RESERVED_KEYS`]
///
/// The prefix is repeated until the key is free, so a field the caller
/// already named `fields.level` keeps its value.
pub const COLLISION_PREFIX: &str = "fields.";

const LEVEL_WIDTH: usize = 7;
const ANSI_RESET: &str = "\x1b[0m";

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable single line (default)
    #[default]
    Text,

    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = super::error::LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(super::error::LoggerError::config(
                "output format",
                format!("expected 'text' or 'json', got '{}'", s),
            )),
        }
    }
}

/// Outcome of rendering a record in the requested format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub line: String,
    /// Set when JSON output was requested but the record fell back to text
    pub fell_back: bool,
}

/// Render a record, falling back to text when JSON cannot represent it
pub fn render(record: &LogRecord<'_>, format: OutputFormat, colored: bool) -> Rendered {
    match format {
        OutputFormat::Text => Rendered {
            line: format_text(record, colored),
            fell_back: false,
        },
        OutputFormat::Json => match format_json(record) {
            Ok(line) => Rendered {
                line,
                fell_back: false,
            },
            Err(_) => Rendered {
                line: format_text(record, colored),
                fell_back: true,
            },
        },
    }
}

/// Bracketed level token padded to a fixed width, optionally ANSI colored
pub fn level_token(level: LogLevel, colored: bool) -> String {
    let padded = format!("{:<width$}", format!("[{}]", level.as_str()), width = LEVEL_WIDTH);
    if colored {
        format!(
            "\x1b[{}m{}{}",
            level.color_code().to_fg_str(),
            padded,
            ANSI_RESET
        )
    } else {
        padded
    }
}

/// Format as a human-readable line
pub fn format_text(record: &LogRecord<'_>, colored: bool) -> String {
    let mut line = format!(
        "{} {} {}",
        level_token(record.level, colored),
        TimestampFormat::Text.format(&record.timestamp),
        sanitize_message(record.message)
    );

    if !record.fields.is_empty() {
        line.push(' ');
        line.push_str(&record.fields.format_fields());
    }

    line
}

/// Format as a single-line JSON object
pub fn format_json(record: &LogRecord<'_>) -> Result<String> {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "timestamp".to_string(),
        serde_json::Value::String(TimestampFormat::Iso8601Nanos.format(&record.timestamp)),
    );
    json_obj.insert(
        "level".to_string(),
        serde_json::Value::String(record.level.as_str().to_string()),
    );
    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(record.message.to_string()),
    );

    for (key, value) in record.fields.iter() {
        json_obj.insert(json_key(key, record.fields), value.to_json_value(key)?);
    }

    Ok(serde_json::to_string(&serde_json::Value::Object(json_obj))?)
}

fn json_key(key: &str, fields: &Fields) -> String {
    if !RESERVED_KEYS.contains(&key) {
        return key.to_string();
    }
    let mut namespaced = format!("{}{}", COLLISION_PREFIX, key);
    while fields.contains_key(&namespaced) {
        namespaced.insert_str(0, COLLISION_PREFIX);
    }
    namespaced
}
