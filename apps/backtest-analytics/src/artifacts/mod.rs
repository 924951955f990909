//! Primitive readers for run artifacts.
//!
//! Tab-delimited logs and JSON snapshots are produced by an external
//! execution process and may be missing, truncated, or numerically
//! corrupt. None of these readers raise:
//! - missing or unreadable files yield an empty result
//! - short rows are padded with empty strings
//! - malformed numbers fall back to a caller-chosen default

mod delimited;
mod json;
mod numeric;

pub use delimited::{
    FIELD_SEPARATOR, Record, parse_delimited, parse_delimited_str, try_read_delimited,
};
pub use json::{parse_json, try_read_json, value_as_f64, value_as_string};
pub use numeric::{
    DATE_FORMAT, date_part, is_truthy, parse_date, parse_finite, safe_float, safe_float_or,
};
