//! Position history and current-position normalization.

use std::path::Path;

use serde_json::Value;

use crate::artifacts::{date_part, value_as_f64, value_as_string};
use crate::models::PositionSnapshot;

use super::{CURRENT_POSITION_FILE, POSITION_LOG, read_log, read_snapshot};

/// Position rows from `position.log`; market value recomputed as size × price.
#[must_use]
pub fn normalize_positions(run_dir: &Path) -> Vec<PositionSnapshot> {
    read_log(run_dir, POSITION_LOG)
        .iter()
        .map(|row| {
            PositionSnapshot::new(
                date_part(row.field("dt")),
                row.field("data_name"),
                row.float("size"),
                row.float("price"),
            )
        })
        .collect()
}

/// Entries of `current_position.json`; market value recomputed as size × price.
///
/// A file that is missing, malformed, or not a JSON array yields `[]`.
/// Entries that are not objects are skipped.
#[must_use]
pub fn normalize_current_position(run_dir: &Path) -> Vec<PositionSnapshot> {
    let Some(entries) = read_snapshot::<Vec<Value>>(run_dir, CURRENT_POSITION_FILE) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| {
            let number = |key: &str| entry.get(key).and_then(value_as_f64).unwrap_or(0.0);
            PositionSnapshot::new(
                String::new(),
                entry.get("data_name").map(value_as_string).unwrap_or_default(),
                number("size"),
                number("price"),
            )
        })
        .collect()
}
