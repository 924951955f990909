//! Return, drawdown, Sharpe and streak calculations.
//!
//! Every function is pure and total: empty, single-point and zero-variance
//! inputs produce neutral values (0 or `None`) instead of errors.

use crate::models::{DrawdownPoint, EquityPoint, PerformanceMetrics, Pnl};

use super::constants::{STD_DEV_TOLERANCE, TRADING_DAYS_PER_YEAR};
use super::math::{mean, std_dev};

/// Compute the performance summary with the default Sharpe annualization.
#[must_use]
pub fn compute_metrics<T: Pnl>(equity_curve: &[EquityPoint], trades: &[T]) -> PerformanceMetrics {
    compute_metrics_with(equity_curve, trades, TRADING_DAYS_PER_YEAR)
}

/// Compute the performance summary, annualizing Sharpe over `periods_per_year`.
///
/// An empty curve yields the neutral summary regardless of `trades`.
#[must_use]
pub fn compute_metrics_with<T: Pnl>(
    equity_curve: &[EquityPoint],
    trades: &[T],
    periods_per_year: f64,
) -> PerformanceMetrics {
    let (Some(first), Some(last)) = (equity_curve.first(), equity_curve.last()) else {
        return PerformanceMetrics::default();
    };

    let initial_capital = first.total_assets;
    let final_assets = last.total_assets;
    let total_return = if initial_capital > 0.0 {
        (final_assets - initial_capital) / initial_capital
    } else {
        0.0
    };
    let total_return = if total_return.is_finite() { total_return } else { 0.0 };

    let trade_count = trades.len() as u64;
    let winners = trades.iter().filter(|t| t.is_winner()).count() as u64;
    let win_rate = if trade_count > 0 {
        winners as f64 / trade_count as f64
    } else {
        0.0
    };

    let values: Vec<f64> = equity_curve.iter().map(|p| p.total_assets).collect();
    let (max_drawdown, max_drawdown_duration) = compute_max_drawdown(&values);
    let sharpe_ratio = compute_sharpe(&compute_daily_returns(&values), periods_per_year);

    PerformanceMetrics {
        initial_capital,
        final_assets,
        total_return,
        trade_count,
        win_rate,
        max_drawdown,
        max_drawdown_duration,
        sharpe_ratio,
        max_consecutive_wins: compute_max_consecutive(trades, true),
        max_consecutive_losses: compute_max_consecutive(trades, false),
    }
}

/// Worst drawdown and the bars elapsed between its peak and trough.
///
/// The drawdown is a non-positive fraction. A curve that never falls below
/// its running peak yields `(0.0, 0)`.
#[must_use]
pub fn compute_max_drawdown(values: &[f64]) -> (f64, u64) {
    let Some((&first, rest)) = values.split_first() else {
        return (0.0, 0);
    };

    let mut peak = first;
    let mut peak_idx = 0usize;
    let mut max_drawdown = 0.0;
    let mut duration = 0u64;

    for (offset, &value) in rest.iter().enumerate() {
        let idx = offset + 1;
        if value > peak {
            peak = value;
            peak_idx = idx;
            continue;
        }

        let drawdown = if peak > 0.0 { (value - peak) / peak } else { 0.0 };
        if drawdown < max_drawdown {
            max_drawdown = drawdown;
            duration = (idx - peak_idx) as u64;
        }
    }

    (max_drawdown, duration)
}

/// Drawdown from the running peak at every point of the curve.
#[must_use]
pub fn compute_drawdown_curve(equity_curve: &[EquityPoint]) -> Vec<DrawdownPoint> {
    let Some(first) = equity_curve.first() else {
        return Vec::new();
    };

    let mut peak = first.total_assets;
    equity_curve
        .iter()
        .map(|point| {
            let value = point.total_assets;
            peak = peak.max(value);
            let drawdown = if peak > 0.0 { (value - peak) / peak } else { 0.0 };
            DrawdownPoint {
                date: point.date.clone(),
                drawdown,
                peak,
                trough: value,
            }
        })
        .collect()
}

/// Simple returns between consecutive points; `N − 1` values.
///
/// A step from a zero value, or one whose return is not finite, has no
/// defined return and contributes 0.0.
#[must_use]
pub fn compute_daily_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| {
            let ret = if w[0] != 0.0 { (w[1] - w[0]) / w[0] } else { 0.0 };
            if ret.is_finite() { ret } else { 0.0 }
        })
        .collect()
}

/// Annualized Sharpe ratio: `mean / sample_std × sqrt(periods_per_year)`.
///
/// `None` for fewer than two samples, a zero-variance series, or any
/// input that makes the ratio non-finite. Pass `1.0` for the unscaled
/// per-period ratio.
#[must_use]
pub fn compute_sharpe(returns: &[f64], periods_per_year: f64) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }

    let avg = mean(returns)?;
    let std = std_dev(returns)?;

    if std <= STD_DEV_TOLERANCE {
        return None;
    }

    Some(avg / std * periods_per_year.sqrt()).filter(|ratio| ratio.is_finite())
}

/// Longest streak of trades matching the win/loss predicate.
///
/// A trade is a win when `pnl > 0`; zero P&L counts as a loss.
#[must_use]
pub fn compute_max_consecutive<T: Pnl>(trades: &[T], want_wins: bool) -> u64 {
    let mut current = 0u64;
    let mut max_streak = 0u64;

    for trade in trades {
        if trade.is_winner() == want_wins {
            current += 1;
            max_streak = max_streak.max(current);
        } else {
            current = 0;
        }
    }

    max_streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTrade;

    fn curve(values: &[f64]) -> Vec<EquityPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| EquityPoint::new(format!("2024-01-{:02}", i + 1), *v, *v))
            .collect()
    }

    fn trades(pnls: &[f64]) -> Vec<RawTrade> {
        pnls.iter()
            .map(|pnl| RawTrade {
                pnl: *pnl,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_empty_curve_is_neutral() {
        let metrics = compute_metrics::<RawTrade>(&[], &[]);
        assert_eq!(metrics.total_return, 0.0);
        assert_eq!(metrics.initial_capital, 0.0);
        assert_eq!(metrics.final_assets, 0.0);
        assert_eq!(metrics.sharpe_ratio, None);
        assert_eq!(metrics, PerformanceMetrics::default());
    }

    #[test]
    fn test_metrics_basic_run() {
        let equity = curve(&[100_000.0, 105_000.0, 103_000.0, 110_000.0]);
        let metrics = compute_metrics(&equity, &trades(&[5000.0, -2000.0, 7000.0]));

        assert_eq!(metrics.initial_capital, 100_000.0);
        assert_eq!(metrics.final_assets, 110_000.0);
        assert!((metrics.total_return - 0.1).abs() < 1e-12);
        assert_eq!(metrics.trade_count, 3);
        assert!((metrics.win_rate - 2.0 / 3.0).abs() < 1e-12);
        assert!(metrics.max_drawdown < 0.0);
        assert_eq!(metrics.max_drawdown_duration, 1);
        assert!(metrics.sharpe_ratio.is_some());
        assert_eq!(metrics.max_consecutive_wins, 1);
        assert_eq!(metrics.max_consecutive_losses, 1);
    }

    #[test]
    fn test_non_positive_initial_capital_has_zero_return() {
        let metrics = compute_metrics::<f64>(&curve(&[0.0, 10.0]), &[]);
        assert_eq!(metrics.total_return, 0.0);
        assert_eq!(metrics.win_rate, 0.0);
    }

    #[test]
    fn test_monotonic_curve_has_no_drawdown() {
        assert_eq!(compute_max_drawdown(&[100.0, 101.0, 105.0, 110.0]), (0.0, 0));
        assert_eq!(compute_max_drawdown(&[100.0, 100.0, 100.0]), (0.0, 0));
        assert_eq!(compute_max_drawdown(&[]), (0.0, 0));
    }

    #[test]
    fn test_drawdown_from_peak() {
        let (drawdown, duration) = compute_max_drawdown(&[100.0, 120.0, 90.0, 110.0]);
        assert!((drawdown - (-0.25)).abs() < 1e-12);
        assert_eq!(duration, 1);
    }

    #[test]
    fn test_drawdown_duration_counts_bars_since_peak() {
        // Peak at index 1, worst trough three bars later.
        let (drawdown, duration) = compute_max_drawdown(&[100.0, 110.0, 105.0, 100.0, 99.0, 120.0]);
        assert!((drawdown - (99.0 - 110.0) / 110.0).abs() < 1e-12);
        assert_eq!(duration, 3);
    }

    #[test]
    fn test_drawdown_curve() {
        let points = compute_drawdown_curve(&curve(&[100.0, 120.0, 90.0, 110.0]));
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].drawdown, 0.0);
        assert_eq!(points[1].peak, 120.0);
        assert!((points[2].drawdown - (-0.25)).abs() < 1e-12);
        assert_eq!(points[2].trough, 90.0);
        assert!(points.iter().all(|p| p.drawdown <= 0.0));
        assert!(compute_drawdown_curve(&[]).is_empty());
    }

    #[test]
    fn test_daily_returns() {
        let returns = compute_daily_returns(&[100.0, 110.0, 105.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.1).abs() < 0.001);
        assert!(compute_daily_returns(&[100.0]).is_empty());
        assert!(compute_daily_returns(&[]).is_empty());
        assert_eq!(compute_daily_returns(&[0.0, 5.0]), vec![0.0]);
    }

    #[test]
    fn test_sharpe_undefined_cases() {
        assert_eq!(compute_sharpe(&[0.01], TRADING_DAYS_PER_YEAR), None);
        assert_eq!(compute_sharpe(&[], TRADING_DAYS_PER_YEAR), None);
        assert_eq!(
            compute_sharpe(&[0.01, 0.01, 0.01], TRADING_DAYS_PER_YEAR),
            None
        );
    }

    #[test]
    fn test_sharpe_positive() {
        let returns = [0.01, 0.02, -0.005, 0.015, 0.01];
        let Some(sharpe) = compute_sharpe(&returns, TRADING_DAYS_PER_YEAR) else {
            panic!("sharpe should be defined for a varying series");
        };
        assert!(sharpe > 0.0);

        let Some(unscaled) = compute_sharpe(&returns, 1.0) else {
            panic!("unscaled sharpe should be defined");
        };
        assert!((sharpe - unscaled * TRADING_DAYS_PER_YEAR.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_consecutive_wins() {
        assert_eq!(compute_max_consecutive(&trades(&[10.0, 20.0, -5.0, 15.0]), true), 2);
    }

    #[test]
    fn test_consecutive_losses() {
        assert_eq!(compute_max_consecutive(&trades(&[-10.0, -20.0, 5.0]), false), 2);
    }

    #[test]
    fn test_consecutive_empty() {
        assert_eq!(compute_max_consecutive::<f64>(&[], true), 0);
        assert_eq!(compute_max_consecutive::<f64>(&[], false), 0);
    }

    #[test]
    fn test_zero_pnl_counts_as_loss() {
        let pnls = [5.0, 0.0, 5.0, 5.0];
        assert_eq!(compute_max_consecutive(&pnls, true), 2);
        assert_eq!(compute_max_consecutive(&pnls, false), 1);
    }

    #[test]
    fn test_non_finite_step_return_is_neutral() {
        let returns = compute_daily_returns(&[1e-310, 1e10, 1e10]);
        assert_eq!(returns, vec![0.0, 0.0]);
    }

    #[test]
    fn test_sharpe_non_finite_input_is_none() {
        assert_eq!(compute_sharpe(&[0.01, f64::NAN, 0.02], TRADING_DAYS_PER_YEAR), None);
        assert_eq!(compute_sharpe(&[0.01, f64::INFINITY, 0.02], TRADING_DAYS_PER_YEAR), None);
    }

    #[test]
    fn test_tiny_initial_capital_stays_finite() {
        let metrics = compute_metrics::<f64>(&curve(&[1e-310, 1e10, 1e10]), &[]);
        assert_eq!(metrics.sharpe_ratio, None);
        assert_eq!(metrics.total_return, 0.0);
        assert!(serde_json::to_value(&metrics).unwrap()["total_return"].is_number());
    }
}
