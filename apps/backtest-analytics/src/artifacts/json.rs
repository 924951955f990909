//! Tolerant JSON snapshot reader.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ArtifactError;

/// Decode a JSON artifact, `None` when it is missing or malformed.
#[must_use]
pub fn parse_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    try_read_json(path).ok()
}

/// Decode a JSON artifact, reporting why it could not be decoded.
pub fn try_read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).map_err(|e| ArtifactError::from_io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Numeric view of a JSON value that may hold a number or numeric text.
///
/// Anything else, and non-finite results, yield `None`.
#[must_use]
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => super::numeric::parse_finite(Some(s)),
        _ => None,
    }
}

/// Text view of a JSON value; numbers and booleans are rendered, `null` is `""`.
#[must_use]
pub fn value_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
