//! Tolerant tab-delimited log reader.
//!
//! The first line of a log is its header and defines the field set and
//! column order. Short rows are right-padded with empty strings, extra
//! trailing cells are ignored, and blank lines are skipped. Nothing here
//! coerces values; every cell stays a string.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::ArtifactError;

use super::numeric::{safe_float, safe_float_or};

/// Column separator used by the execution engine's logs.
pub const FIELD_SEPARATOR: char = '\t';

/// One data row of a delimited log, keyed by the header's field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    /// Value of `field`, or `None` when the header has no such column.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == field)
            .map(|idx| self.values[idx].as_str())
    }

    /// Value of `field`, or `""` when the header has no such column.
    #[must_use]
    pub fn field(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Numeric value of `field`, 0.0 when absent or malformed.
    #[must_use]
    pub fn float(&self, field: &str) -> f64 {
        safe_float(self.get(field))
    }

    /// Numeric value of `field`, `default` when absent or malformed.
    #[must_use]
    pub fn float_or(&self, field: &str, default: f64) -> f64 {
        safe_float_or(self.get(field), default)
    }

    /// Field names in column order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// `(field, value)` pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    /// Number of fields (always the header width).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the header declared no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse a delimited log into records.
///
/// A missing, unreadable, empty, or header-only file yields `[]`.
#[must_use]
pub fn parse_delimited(path: &Path) -> Vec<Record> {
    try_read_delimited(path).unwrap_or_default()
}

/// Read a delimited log, reporting why the file could not be read.
pub fn try_read_delimited(path: &Path) -> Result<Vec<Record>, ArtifactError> {
    let bytes = fs::read(path).map_err(|e| ArtifactError::from_io(path, e))?;
    Ok(parse_delimited_str(&String::from_utf8_lossy(&bytes)))
}

/// Parse delimited text already held in memory.
#[must_use]
pub fn parse_delimited_str(content: &str) -> Vec<Record> {
    let mut lines = content.lines();

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    if header_line.trim().is_empty() {
        return Vec::new();
    }

    let headers: Arc<[String]> = header_line
        .split(FIELD_SEPARATOR)
        .map(|h| h.trim().to_string())
        .collect();
    let width = headers.len();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut values: Vec<String> = line
                .split(FIELD_SEPARATOR)
                .take(width)
                .map(|v| v.trim().to_string())
                .collect();
            values.resize(width, String::new());
            Record {
                headers: Arc::clone(&headers),
                values,
            }
        })
        .collect()
}
