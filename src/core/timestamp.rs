//! Timestamp formatting for rendered records

use chrono::{DateTime, Local, SecondsFormat};

/// Timestamp layouts used by the two output forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Text form layout: `2025.01.08 10:30:45.123`
    Text,

    /// ISO 8601 with nanoseconds and offset: `2025-01-08T10:30:45.123456789+02:00`
    Iso8601Nanos,
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Text => datetime.format("%Y.%m.%d %H:%M:%S%.3f").to_string(),
            TimestampFormat::Iso8601Nanos => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn sample() -> DateTime<Local> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(123_456_789))
            .unwrap()
            .with_timezone(&Local)
    }

    #[test]
    fn test_text_format_has_millis() {
        let ts = sample();
        let formatted = TimestampFormat::Text.format(&ts);
        // 2025.01.08 10:30:45.123 in local time
        assert_eq!(formatted.len(), 23);
        assert_eq!(&formatted[4..5], ".");
        assert_eq!(&formatted[7..8], ".");
        assert!(formatted.ends_with(".123"));
    }

    #[test]
    fn test_iso_format_has_nanos() {
        let ts = sample();
        let formatted = TimestampFormat::Iso8601Nanos.format(&ts);
        assert!(formatted.contains(".123456789"));
        assert!(formatted.contains('T'));
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        assert_eq!(parsed.timestamp_nanos_opt(), ts.timestamp_nanos_opt());
    }
}
