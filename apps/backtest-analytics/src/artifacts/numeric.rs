//! String-to-value coercion applied once, at the normalization boundary.

use chrono::{NaiveDate, NaiveDateTime};

/// Date format used by every artifact timestamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a finite number, `None` for absent, non-numeric, or non-finite text.
#[must_use]
pub fn parse_finite(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse a number, falling back to 0.0.
#[must_use]
pub fn safe_float(raw: Option<&str>) -> f64 {
    safe_float_or(raw, 0.0)
}

/// Parse a number, falling back to `default`.
///
/// `NaN` and infinities count as malformed.
#[must_use]
pub fn safe_float_or(raw: Option<&str>, default: f64) -> f64 {
    parse_finite(raw).unwrap_or(default)
}

/// Truncate a `YYYY-MM-DD[ HH:MM:SS]` timestamp to its date portion.
///
/// Text that is not a timestamp is kept, cut at the first space or `T`.
#[must_use]
pub fn date_part(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(date) = parse_date(raw) {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.split([' ', 'T']).next().unwrap_or_default().to_string()
}

/// Parse the date of a timestamp, with or without a time of day.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .ok()
        .or_else(|| {
            raw.get(..10)
                .and_then(|head| NaiveDate::parse_from_str(head, DATE_FORMAT).ok())
        })
}

/// Interpret a logged boolean flag (`True`, `true`, `1`, `yes`).
#[must_use]
pub fn is_truthy(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes") {
        return true;
    }
    parse_finite(Some(raw)).is_some_and(|v| v != 0.0)
}
