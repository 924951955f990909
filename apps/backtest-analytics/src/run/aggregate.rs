//! Run aggregation: one summary per run directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, span, warn};

use crate::analytics::{
    DEFAULT_MA_PERIODS, IndicatorSeries, TRADING_DAYS_PER_YEAR, compute_drawdown_curve,
    compute_indicators, compute_metrics_with, compute_monthly_returns, extract_signals,
};
use crate::models::{
    DrawdownPoint, EquityPoint, MonthlyReturns, OrderRecord, PerformanceMetrics, PositionSnapshot,
    PriceSeries, RunInfo, Signal, TradeRecord,
};
use crate::records::{
    normalize_current_position, normalize_orders, normalize_positions, normalize_price_series,
    normalize_run_info, normalize_trades, normalize_value_series,
};

use super::locator::{DEFAULT_RUN_PREFIX, LatestRunLocator, RunLocator, list_runs};

/// Default name of the logs directory under a base directory.
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Everything computed for one run directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Run directory name.
    pub run_id: String,
    /// Run directory path.
    pub run_dir: PathBuf,
    /// Free-form run metadata.
    pub info: RunInfo,
    /// Return from the first to the last value-log row.
    pub total_return: f64,
    /// Number of closed trades.
    pub total_trades: u64,
    /// Fraction of closed trades with positive P&L.
    pub win_rate: f64,
    /// Full metric set over the value series and closed trades.
    pub metrics: PerformanceMetrics,
    /// One point per value-log row.
    pub equity_curve: Vec<EquityPoint>,
    /// Drawdown at every equity point.
    pub drawdown_curve: Vec<DrawdownPoint>,
    /// Closed trades with ids and running P&L.
    pub trades: Vec<TradeRecord>,
    /// Completed orders.
    pub orders: Vec<OrderRecord>,
    /// Buy/sell signals from completed orders.
    pub signals: Vec<Signal>,
    /// Position history.
    pub positions: Vec<PositionSnapshot>,
    /// Positions held at the end of the run.
    pub current_positions: Vec<PositionSnapshot>,
    /// Prices and logged indicator columns.
    pub prices: PriceSeries,
    /// Moving averages of close, keyed by period.
    pub indicators: BTreeMap<usize, IndicatorSeries>,
    /// Calendar-month returns.
    pub monthly_returns: MonthlyReturns,
}

/// Settings applied when summarizing runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatorOptions {
    /// Logs directory name under the base directory.
    pub logs_dir: String,
    /// Run directory name prefix.
    pub run_prefix: String,
    /// Sharpe annualization factor.
    pub periods_per_year: f64,
    /// Moving-average periods.
    pub indicator_periods: Vec<usize>,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            logs_dir: DEFAULT_LOGS_DIR.to_string(),
            run_prefix: DEFAULT_RUN_PREFIX.to_string(),
            periods_per_year: TRADING_DAYS_PER_YEAR,
            indicator_periods: DEFAULT_MA_PERIODS.to_vec(),
        }
    }
}

/// Locates run directories and summarizes them.
#[derive(Debug, Clone)]
pub struct RunAggregator<L = LatestRunLocator> {
    locator: L,
    options: AggregatorOptions,
}

impl RunAggregator<LatestRunLocator> {
    /// Aggregator selecting the latest `<run_prefix>*` directory.
    #[must_use]
    pub fn from_options(options: AggregatorOptions) -> Self {
        Self {
            locator: LatestRunLocator::new(options.run_prefix.clone()),
            options,
        }
    }
}

impl Default for RunAggregator<LatestRunLocator> {
    fn default() -> Self {
        Self::from_options(AggregatorOptions::default())
    }
}

impl<L: RunLocator> RunAggregator<L> {
    /// Aggregator with a custom run selection strategy.
    #[must_use]
    pub const fn new(locator: L, options: AggregatorOptions) -> Self {
        Self { locator, options }
    }

    /// Settings in use.
    #[must_use]
    pub const fn options(&self) -> &AggregatorOptions {
        &self.options
    }

    /// Logs directory under `base_dir`.
    #[must_use]
    pub fn logs_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.options.logs_dir)
    }

    /// Summarize the run selected under `<base_dir>/<logs_dir>`.
    ///
    /// `None` when no run directory is found.
    #[must_use]
    pub fn aggregate(&self, base_dir: &Path) -> Option<RunSummary> {
        let logs_dir = self.logs_dir(base_dir);
        let Some(run_dir) = self.locator.locate(&logs_dir) else {
            warn!(logs_dir = %logs_dir.display(), "No run directory found");
            return None;
        };

        info!(run_dir = %run_dir.display(), "Aggregating run");
        Some(self.summarize(&run_dir))
    }

    /// Summarize a known run directory.
    ///
    /// Missing artifacts contribute empty series; this never fails.
    #[must_use]
    pub fn summarize(&self, run_dir: &Path) -> RunSummary {
        let _span = span!(Level::DEBUG, "summarize_run", run_dir = %run_dir.display()).entered();

        let equity_curve = normalize_value_series(run_dir);
        let trades = normalize_trades(run_dir);
        let orders = normalize_orders(run_dir);
        let prices = normalize_price_series(run_dir);

        let metrics = compute_metrics_with(&equity_curve, &trades, self.options.periods_per_year);
        let indicators = compute_indicators(&prices.klines(), &self.options.indicator_periods);

        let run_id = run_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(
            run_id = %run_id,
            equity_points = equity_curve.len(),
            trades = trades.len(),
            orders = orders.len(),
            bars = prices.len(),
            "Run artifacts normalized"
        );

        RunSummary {
            run_id,
            run_dir: run_dir.to_path_buf(),
            info: normalize_run_info(run_dir),
            total_return: metrics.total_return,
            total_trades: trades.len() as u64,
            win_rate: metrics.win_rate,
            drawdown_curve: compute_drawdown_curve(&equity_curve),
            monthly_returns: compute_monthly_returns(&equity_curve),
            signals: extract_signals(&orders),
            positions: normalize_positions(run_dir),
            current_positions: normalize_current_position(run_dir),
            metrics,
            equity_curve,
            trades,
            orders,
            prices,
            indicators,
        }
    }

    /// Summarize every `<run_prefix>*` directory under `<base_dir>/<logs_dir>`,
    /// in parallel, sorted by run id.
    #[must_use]
    pub fn summarize_all(&self, base_dir: &Path) -> Vec<RunSummary>
    where
        L: Sync,
    {
        let runs = list_runs(&self.logs_dir(base_dir), &self.options.run_prefix);
        info!(runs = runs.len(), "Summarizing runs");

        runs.par_iter().map(|run_dir| self.summarize(run_dir)).collect()
    }
}

/// Summarize the latest `run_*` directory under `<base_dir>/logs`.
///
/// `None` when no run directory exists.
#[must_use]
pub fn aggregate_run(base_dir: &Path) -> Option<RunSummary> {
    RunAggregator::default().aggregate(base_dir)
}

/// Summarize every `run_*` directory under `<base_dir>/logs`.
#[must_use]
pub fn summarize_runs(base_dir: &Path, options: AggregatorOptions) -> Vec<RunSummary> {
    RunAggregator::from_options(options).summarize_all(base_dir)
}
