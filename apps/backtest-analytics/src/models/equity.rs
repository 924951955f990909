//! Account value over time.

use serde::{Deserialize, Serialize};

/// Account value at one processed time-step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Date (`YYYY-MM-DD`).
    pub date: String,
    /// Total account value.
    pub total_assets: f64,
    /// Cash balance.
    pub cash: f64,
    /// Value held in positions.
    pub position_value: f64,
}

impl EquityPoint {
    /// Build a point from total value and cash; the rest is in positions.
    #[must_use]
    pub fn new(date: impl Into<String>, total_assets: f64, cash: f64) -> Self {
        Self {
            date: date.into(),
            total_assets,
            cash,
            position_value: total_assets - cash,
        }
    }
}

/// Drawdown tracking point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    /// Date (`YYYY-MM-DD`).
    pub date: String,
    /// Decline from peak as a non-positive fraction (-0.10 = 10% below peak).
    pub drawdown: f64,
    /// Running maximum equity up to and including this point.
    pub peak: f64,
    /// Equity at this point.
    pub trough: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_value_is_derived() {
        let point = EquityPoint::new("2024-01-02", 105_000.0, 40_000.0);
        assert_eq!(point.position_value, 65_000.0);
    }
}
