//! Contextual key/value fields attached to a logger
//!
//! A [`Fields`] set is copy-on-extend: deriving a new set clones the parent's
//! entries and applies the new ones, leaving the parent untouched. Keys on the
//! sensitive denylist are redacted at insertion time, so their original value
//! is never stored.

use super::error::{LoggerError, Result};
use super::log_entry::sanitize_message;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Marker stored in place of a sensitive field's value
pub const REDACTION_MARKER: &str = "[FILTERED]";

const SENSITIVE_KEYS: [&str; 4] = ["password", "token", "credit_card", "secret"];

/// Whether `key` names a field whose value must never be written
pub fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS
        .iter()
        .any(|sensitive| sensitive.eq_ignore_ascii_case(key))
}

/// Value type for structured logging fields
///
/// `Display` and `Debug` values are kept as-is and only turned into text when
/// a record is rendered.
#[derive(Clone)]
pub enum FieldValue {
    String(String),
    /// Message of an error value
    Error(String),
    /// Custom value rendered through its `Display` impl
    Display(Arc<dyn fmt::Display + Send + Sync>),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Arbitrary JSON data, rendered inline in text mode
    Json(serde_json::Value),
    /// Opaque value with only a `Debug` representation
    Debug(Arc<dyn fmt::Debug + Send + Sync>),
    Null,
}

impl FieldValue {
    /// Capture an error by its message
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        FieldValue::Error(err.to_string())
    }

    pub fn display<T: fmt::Display + Send + Sync + 'static>(value: T) -> Self {
        FieldValue::Display(Arc::new(value))
    }

    pub fn debug<T: fmt::Debug + Send + Sync + 'static>(value: T) -> Self {
        FieldValue::Debug(Arc::new(value))
    }

    /// Capture any serializable value as structured JSON data
    ///
    /// ```
    /// use rust_field_logger::FieldValue;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Peer {
    ///     host: &'static str,
    ///     port: u16,
    /// }
    ///
    /// let value = FieldValue::serialize(&Peer { host: "db", port: 5432 }).unwrap();
    /// assert_eq!(value.to_text(), r#"{"host":"db","port":5432}"#);
    /// ```
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(FieldValue::Json(serde_json::to_value(value)?))
    }

    /// Text form of the value as it appears after `key=`
    ///
    /// Always a single line: strings are quoted and escaped, and the output
    /// of opaque `Debug` values has its line breaks escaped.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::String(s) | FieldValue::Error(s) => format!("{:?}", s),
            FieldValue::Display(value) => format!("{:?}", resolve_display(value.as_ref())),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::UInt(u) => u.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Json(value) => value.to_string(),
            FieldValue::Debug(value) => {
                let mut out = String::new();
                if write!(out, "{:?}", value).is_err() {
                    out.push_str(FORMAT_ERROR_MARKER);
                }
                sanitize_message(&out).into_owned()
            }
            FieldValue::Null => "null".to_string(),
        }
    }

    /// Convert to a `serde_json::Value`, failing for values JSON cannot carry
    pub fn to_json_value(&self, key: &str) -> Result<serde_json::Value> {
        use serde_json::Value;

        match self {
            FieldValue::String(s) | FieldValue::Error(s) => Ok(Value::String(s.clone())),
            FieldValue::Display(value) => Ok(Value::String(resolve_display(value.as_ref()))),
            FieldValue::Int(i) => Ok(Value::Number((*i).into())),
            FieldValue::UInt(u) => Ok(Value::Number((*u).into())),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .ok_or_else(|| LoggerError::unrepresentable(key, format!("non-finite float {}", f))),
            FieldValue::Bool(b) => Ok(Value::Bool(*b)),
            FieldValue::Json(value) => Ok(value.clone()),
            FieldValue::Debug(_) => Err(LoggerError::unrepresentable(
                key,
                "opaque value has no structured form",
            )),
            FieldValue::Null => Ok(Value::Null),
        }
    }
}

pub(crate) const FORMAT_ERROR_MARKER: &str = "[format error]";

/// Render a `Display` value, substituting an inline marker if it reports an error
pub(crate) fn resolve_display(value: &dyn fmt::Display) -> String {
    let mut out = String::new();
    if write!(out, "{}", value).is_err() {
        out.push_str(FORMAT_ERROR_MARKER);
    }
    out
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.debug_tuple("String").field(s).finish(),
            FieldValue::Error(s) => f.debug_tuple("Error").field(s).finish(),
            FieldValue::Display(value) => f
                .debug_tuple("Display")
                .field(&resolve_display(value.as_ref()))
                .finish(),
            FieldValue::Int(i) => f.debug_tuple("Int").field(i).finish(),
            FieldValue::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            FieldValue::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            FieldValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            FieldValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
            FieldValue::Debug(value) => f.debug_tuple("Debug").field(value).finish(),
            FieldValue::Null => f.write_str("Null"),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($source:ty),+) => {
        $(
            impl From<$source> for FieldValue {
                fn from(value: $source) -> Self {
                    FieldValue::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Json(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Immutable-on-write set of fields, ordered by key
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: BTreeMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a new set with one more field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut derived = self.clone();
        derived.insert(key.into(), value.into());
        derived
    }

    /// Derive a new set with every entry of `entries` applied in order
    #[must_use]
    pub fn with_fields<I, K, V>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut derived = self.clone();
        for (key, value) in entries {
            derived.insert(key.into(), value.into());
        }
        derived
    }

    fn insert(&mut self, key: String, value: FieldValue) {
        let value = if is_sensitive_key(&key) {
            FieldValue::String(REDACTION_MARKER.to_string())
        } else {
            value
        };
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format fields as space-separated key=value pairs
    ///
    /// Line breaks in keys are escaped like those in messages.
    pub fn format_fields(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", sanitize_message(k), v.to_text()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_fields())
    }
}
