//! Performance metrics calculation for backtest evaluation.
//!
//! Implements the canonical metric set over an equity curve and its
//! closed trades:
//! - Total return and win rate
//! - Maximum drawdown (peak-to-trough decline) and its duration in bars
//! - Sharpe ratio (risk-adjusted returns)
//! - Consecutive win/loss streaks
//! - Moving-average indicators over price bars
//! - Drawdown curve, signals, and monthly returns
//!
//! The same functions serve both the in-memory path (a backtest job handing
//! over its series right after a run) and the file-based run aggregator.

mod calculator;
mod constants;
mod format;
mod indicators;
mod math;
mod monthly;
mod trades;

pub use calculator::{
    compute_daily_returns, compute_drawdown_curve, compute_max_consecutive, compute_max_drawdown,
    compute_metrics, compute_metrics_with, compute_sharpe,
};
pub use constants::{DEFAULT_MA_PERIODS, STD_DEV_TOLERANCE, TRADING_DAYS_PER_YEAR};
pub use format::{format_amount, format_pct, format_ratio};
pub use indicators::{IndicatorSeries, compute_indicators, ma_key, moving_average};
pub use math::{mean, std_dev};
pub use monthly::compute_monthly_returns;
pub use trades::{extract_signals, process_trades};
