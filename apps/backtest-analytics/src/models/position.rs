//! Position snapshots.

use serde::{Deserialize, Serialize};

/// Holding in one instrument at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    /// Snapshot date (`YYYY-MM-DD`), empty for the current-position file.
    pub dt: String,
    /// Data feed / instrument name.
    pub data_name: String,
    /// Signed position size.
    pub size: f64,
    /// Position price.
    pub price: f64,
    /// `size × price`.
    pub market_value: f64,
}

impl PositionSnapshot {
    /// Build a snapshot; market value is always derived from size and price.
    #[must_use]
    pub fn new(dt: impl Into<String>, data_name: impl Into<String>, size: f64, price: f64) -> Self {
        Self {
            dt: dt.into(),
            data_name: data_name.into(),
            size,
            price,
            market_value: size * price,
        }
    }
}
