//! Backend timestamp normalization and Prague-local rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend emits timestamps in several shapes: full RFC 3339 strings,
//! offset-less datetime strings, and plain dates. Everything user-facing is
//! rendered in the fixed `Europe/Prague` zone regardless of the browser
//! locale.
//!
//! TRADE-OFFS
//! ==========
//! Offset-less strings are treated as UTC by appending `Z` before parsing.
//! This is a compatibility shim for upstream records stored without zone
//! information, not a general parsing rule; it can be deleted once the
//! backend always emits explicit offsets.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Prague;

/// Rendered when a value is absent or unparseable.
pub const PLACEHOLDER: &str = "-";

const DATE_FORMAT: &str = "%d.%m.%Y";
const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";
const DATE_TIME_SECONDS_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// A backend timestamp: either an already-parsed instant or a raw string.
#[derive(Clone, Debug, PartialEq)]
pub enum TimestampValue {
    Instant(DateTime<Utc>),
    Text(String),
}

impl From<DateTime<Utc>> for TimestampValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<&str> for TimestampValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TimestampValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Whether the string already carries a trailing `Z` or `±HH:MM` offset.
fn has_explicit_offset(raw: &str) -> bool {
    if raw.ends_with('Z') {
        return true;
    }
    let bytes = raw.as_bytes();
    if bytes.len() < 6 {
        return false;
    }
    let tail = &bytes[bytes.len() - 6..];
    (tail[0] == b'+' || tail[0] == b'-')
        && tail[1].is_ascii_digit()
        && tail[2].is_ascii_digit()
        && tail[3] == b':'
        && tail[4].is_ascii_digit()
        && tail[5].is_ascii_digit()
}

/// Append `Z` to offset-less timestamp strings so they parse as UTC.
/// Strings with an explicit offset are returned unchanged.
pub fn normalize_timestamp(raw: &str) -> String {
    if has_explicit_offset(raw) {
        raw.to_owned()
    } else {
        format!("{raw}Z")
    }
}

/// Parse a timestamp into a UTC instant. Instants pass through unchanged;
/// strings are normalized and parsed as RFC 3339, with a plain-date
/// fallback (contract dates arrive as `YYYY-MM-DD`, taken as UTC midnight).
/// Malformed input yields `None`.
pub fn parse_timestamp(value: &TimestampValue) -> Option<DateTime<Utc>> {
    match value {
        TimestampValue::Instant(instant) => Some(*instant),
        TimestampValue::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalize_timestamp(trimmed)) {
                return Some(parsed.with_timezone(&Utc));
            }
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| Utc.from_utc_datetime(&midnight))
        }
    }
}

fn render_prague(instant: DateTime<Utc>, format: &str) -> String {
    instant.with_timezone(&Prague).format(format).to_string()
}

/// Prague-local `DD.MM.YYYY HH:MM[:SS]`, or `""` when the value is absent
/// or unparseable. For callers that need "no value" distinct from a dash.
pub fn try_format_date_time(value: Option<&str>, with_seconds: bool) -> String {
    let format = if with_seconds {
        DATE_TIME_SECONDS_FORMAT
    } else {
        DATE_TIME_FORMAT
    };
    value
        .and_then(|raw| parse_timestamp(&TimestampValue::from(raw)))
        .map(|instant| render_prague(instant, format))
        .unwrap_or_default()
}

/// Prague-local `DD.MM.YYYY HH:MM[:SS]`, or the placeholder dash.
pub fn format_date_time(value: Option<&str>, with_seconds: bool) -> String {
    let rendered = try_format_date_time(value, with_seconds);
    if rendered.is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        rendered
    }
}

/// Prague-local `DD.MM.YYYY`, or the placeholder dash.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(|raw| parse_timestamp(&TimestampValue::from(raw)))
        .map(|instant| render_prague(instant, DATE_FORMAT))
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}
