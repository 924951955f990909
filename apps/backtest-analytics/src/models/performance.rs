//! Computed performance statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Performance summary over an equity curve and its closed trades.
///
/// `Default` is the neutral summary returned for an empty curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// First equity value.
    pub initial_capital: f64,
    /// Last equity value.
    pub final_assets: f64,
    /// Total return (fraction, e.g. 0.15 = 15%).
    pub total_return: f64,
    /// Number of closed trades.
    pub trade_count: u64,
    /// Fraction of trades with positive P&L.
    pub win_rate: f64,
    /// Worst peak-to-trough decline (non-positive fraction).
    pub max_drawdown: f64,
    /// Bars between the peak and the worst trough.
    pub max_drawdown_duration: u64,
    /// Annualized Sharpe ratio, `None` when undefined.
    pub sharpe_ratio: Option<f64>,
    /// Longest run of winning trades.
    pub max_consecutive_wins: u64,
    /// Longest run of non-winning trades.
    pub max_consecutive_losses: u64,
}

/// Return of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Fractional return.
    #[serde(rename = "return")]
    pub value: f64,
}

/// Monthly returns with their yearly roll-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturns {
    /// Months in chronological order.
    pub entries: Vec<MonthlyReturn>,
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Compounded return per year.
    pub yearly: BTreeMap<i32, f64>,
}
