//! Order-related types read from a run's order log.

use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl OrderSide {
    /// Map a logged order-type cell to a side.
    ///
    /// Accepts `buy`/`sell` in any case and the numeric `0`/`1` codes.
    /// Anything else falls back to the sign of the order size.
    #[must_use]
    pub fn from_raw(raw: &str, size: f64) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buy" | "0" => Self::Buy,
            "sell" | "1" => Self::Sell,
            _ if size < 0.0 => Self::Sell,
            _ => Self::Buy,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completed order from the order log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Engine-assigned order reference.
    #[serde(rename = "ref")]
    pub order_ref: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub order_type: OrderSide,
    /// Signed order size.
    pub size: f64,
    /// Average executed price.
    pub executed_price: f64,
    /// Commission charged.
    pub commission: f64,
    /// Execution date (`YYYY-MM-DD`).
    pub dt: String,
    /// Data feed / instrument name.
    pub data_name: String,
}

/// A strategy entry/exit signal derived from a completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Signal date (`YYYY-MM-DD`).
    pub date: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub signal_type: OrderSide,
    /// Execution price.
    pub price: f64,
    /// Absolute size.
    pub size: f64,
}
