//! Property tests for the metrics engine.

#![allow(clippy::unwrap_used)]

use backtest_analytics::analytics::{
    compute_daily_returns, compute_drawdown_curve, compute_indicators, compute_max_consecutive,
    compute_max_drawdown, compute_metrics, process_trades,
};
use backtest_analytics::models::{EquityPoint, Kline, RawTrade};
use proptest::prelude::*;

mod generators {
    use super::*;

    pub fn equity_values() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(1.0f64..1_000_000.0, 0..64)
    }

    pub fn pnls() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1_000.0f64..1_000.0, 0..64)
    }

    pub fn curve(values: &[f64]) -> Vec<EquityPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| EquityPoint::new(format!("2024-01-{:02}", i % 28 + 1), v, v))
            .collect()
    }

    pub fn raw_trades(pnls: &[f64]) -> Vec<RawTrade> {
        pnls.iter()
            .map(|&pnl| RawTrade {
                pnl,
                ..RawTrade::default()
            })
            .collect()
    }
}

proptest! {
    #[test]
    fn prop_drawdown_is_bounded(values in generators::equity_values()) {
        let (max_drawdown, duration) = compute_max_drawdown(&values);
        prop_assert!(max_drawdown <= 0.0);
        prop_assert!(max_drawdown >= -1.0);
        prop_assert!((duration as usize) < values.len().max(1));

        let curve = compute_drawdown_curve(&generators::curve(&values));
        prop_assert_eq!(curve.len(), values.len());
        for point in &curve {
            prop_assert!(point.drawdown <= 0.0);
            prop_assert!(point.drawdown >= max_drawdown - 1e-12);
        }
    }

    #[test]
    fn prop_daily_returns_len(values in generators::equity_values()) {
        let returns = compute_daily_returns(&values);
        prop_assert_eq!(returns.len(), values.len().saturating_sub(1));
    }

    #[test]
    fn prop_cumulative_pnl_is_running_sum(pnls in generators::pnls()) {
        let trades = process_trades(&generators::raw_trades(&pnls));
        let mut sum = 0.0;
        for (idx, trade) in trades.iter().enumerate() {
            sum += pnls[idx];
            prop_assert_eq!(trade.id, idx as u64 + 1);
            prop_assert!((trade.cumulative_pnl - sum).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_streaks_bounded_by_counts(pnls in generators::pnls()) {
        let wins = pnls.iter().filter(|&&p| p > 0.0).count() as u64;
        let losses = pnls.len() as u64 - wins;
        prop_assert!(compute_max_consecutive(&pnls, true) <= wins);
        prop_assert!(compute_max_consecutive(&pnls, false) <= losses);
    }

    #[test]
    fn prop_win_rate_in_unit_range(
        values in prop::collection::vec(1.0f64..1_000.0, 1..16),
        pnls in generators::pnls(),
    ) {
        let metrics = compute_metrics(&generators::curve(&values), &pnls);
        prop_assert!((0.0..=1.0).contains(&metrics.win_rate));
        prop_assert_eq!(metrics.trade_count, pnls.len() as u64);
    }

    #[test]
    fn prop_indicator_length(closes in prop::collection::vec(1.0f64..500.0, 1..80), period in 1usize..70) {
        let klines: Vec<Kline> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Kline::flat(format!("d{i}"), c))
            .collect();
        let indicators = compute_indicators(&klines, &[period]);
        let series = &indicators[&period];

        if period <= closes.len() {
            prop_assert_eq!(series.len(), closes.len());
            prop_assert!(series.as_slice()[..period - 1].iter().all(Option::is_none));
            prop_assert!(series.as_slice()[period - 1..].iter().all(Option::is_some));
        } else {
            prop_assert!(series.is_empty());
        }
    }
}
