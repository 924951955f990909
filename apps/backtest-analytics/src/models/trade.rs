//! Closed-trade records.

use serde::{Deserialize, Serialize};

/// Direction of a closed trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// Long position.
    #[default]
    Long,
    /// Short position.
    Short,
}

/// A closed trade before id and running P&L assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTrade {
    /// Close date (`YYYY-MM-DD`).
    pub datetime: String,
    /// Long or short.
    pub direction: TradeDirection,
    /// Entry price.
    pub price: f64,
    /// Position size.
    pub size: f64,
    /// Position value at entry.
    pub value: f64,
    /// Commission paid.
    pub commission: f64,
    /// Gross P&L.
    pub pnl: f64,
    /// P&L net of commission.
    pub pnlcomm: f64,
    /// Bars held.
    pub barlen: u64,
}

/// A closed trade with its position in the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// 1-based id in input order.
    pub id: u64,
    /// Close date (`YYYY-MM-DD`).
    pub datetime: String,
    /// Long or short.
    pub direction: TradeDirection,
    /// Entry price.
    pub price: f64,
    /// Position size.
    pub size: f64,
    /// Position value at entry.
    pub value: f64,
    /// Commission paid.
    pub commission: f64,
    /// Gross P&L.
    pub pnl: f64,
    /// P&L net of commission.
    pub pnlcomm: f64,
    /// Bars held.
    pub barlen: u64,
    /// Sum of `pnl` over this and every earlier trade.
    pub cumulative_pnl: f64,
}

/// Anything carrying a realized P&L.
pub trait Pnl {
    /// Realized P&L.
    fn pnl(&self) -> f64;

    /// Whether the trade was profitable. Zero P&L is not a win.
    fn is_winner(&self) -> bool {
        self.pnl() > 0.0
    }
}

impl Pnl for f64 {
    fn pnl(&self) -> f64 {
        *self
    }
}

impl Pnl for RawTrade {
    fn pnl(&self) -> f64 {
        self.pnl
    }
}

impl Pnl for TradeRecord {
    fn pnl(&self) -> f64 {
        self.pnl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winner_requires_positive_pnl() {
        let trade = TradeRecord {
            pnl: 12.5,
            ..TradeRecord::default()
        };
        assert!(trade.is_winner());
        assert!(!0.0_f64.is_winner());
        assert!(!RawTrade { pnl: -3.0, ..RawTrade::default() }.is_winner());
    }
}
