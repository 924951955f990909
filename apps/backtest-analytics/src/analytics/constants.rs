//! Constants for performance metric calculations.

/// Trading days per year; default Sharpe annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Standard deviations at or below this are treated as zero variance.
pub const STD_DEV_TOLERANCE: f64 = 1e-12;

/// Default moving-average lookback periods.
pub const DEFAULT_MA_PERIODS: [usize; 4] = [5, 10, 20, 60];
