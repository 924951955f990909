//! Moving-average indicators over price bars.
//!
//! A period that fits somewhere in the series yields a full-length series
//! with `None` during warm-up. A period longer than the whole series yields
//! [`IndicatorSeries::Unavailable`], which serializes as an empty list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Kline;

/// Result of one moving-average period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<f64>>", into = "Vec<Option<f64>>")]
pub enum IndicatorSeries {
    /// One entry per bar, `None` before the lookback is filled.
    Values(Vec<Option<f64>>),
    /// The period never fits in the series.
    Unavailable,
}

impl IndicatorSeries {
    /// Entries as a slice; empty when unavailable.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<f64>] {
        match self {
            Self::Values(values) => values,
            Self::Unavailable => &[],
        }
    }

    /// Value at `idx`, `None` during warm-up, out of range, or when unavailable.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.as_slice().get(idx).copied().flatten()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Whether the period could be computed.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Values(_))
    }
}

impl From<Vec<Option<f64>>> for IndicatorSeries {
    fn from(values: Vec<Option<f64>>) -> Self {
        if values.is_empty() {
            Self::Unavailable
        } else {
            Self::Values(values)
        }
    }
}

impl From<IndicatorSeries> for Vec<Option<f64>> {
    fn from(series: IndicatorSeries) -> Self {
        match series {
            IndicatorSeries::Values(values) => values,
            IndicatorSeries::Unavailable => Self::new(),
        }
    }
}

/// Conventional key for a moving-average period (`ma5`, `ma20`, ...).
#[must_use]
pub fn ma_key(period: usize) -> String {
    format!("ma{period}")
}

/// Simple moving averages of `close` for each period.
///
/// Empty `klines` yield an empty map.
#[must_use]
pub fn compute_indicators(klines: &[Kline], periods: &[usize]) -> BTreeMap<usize, IndicatorSeries> {
    if klines.is_empty() {
        return BTreeMap::new();
    }

    let closes: Vec<f64> = klines.iter().map(|k| k.close).collect();
    periods
        .iter()
        .map(|&period| (period, moving_average(&closes, period)))
        .collect()
}

/// Trailing arithmetic mean over `period` values.
#[must_use]
pub fn moving_average(values: &[f64], period: usize) -> IndicatorSeries {
    if period == 0 || values.len() < period {
        return IndicatorSeries::Unavailable;
    }

    let mut series = vec![None; period - 1];
    series.extend(
        values
            .windows(period)
            .map(|w| Some(w.iter().sum::<f64>() / period as f64)),
    );
    IndicatorSeries::Values(series)
}
