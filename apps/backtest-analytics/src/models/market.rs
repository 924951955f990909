//! Price bars and the per-run price/indicator series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Open/high/low/close prices of one bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

/// A dated OHLCV bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kline {
    /// Bar date (`YYYY-MM-DD`).
    pub date: String,
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Kline {
    /// Bar with every price at `close`, for synthetic series.
    #[must_use]
    pub fn flat(date: impl Into<String>, close: f64) -> Self {
        Self {
            date: date.into(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        }
    }
}

/// Parallel price, volume and indicator series, one entry per data-log row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Bar dates (`YYYY-MM-DD`).
    pub dates: Vec<String>,
    /// OHLC per bar.
    pub ohlc: Vec<Ohlc>,
    /// Volume per bar.
    pub volumes: Vec<f64>,
    /// Indicator column name to its values; `None` where the cell was not a finite number.
    pub indicators: BTreeMap<String, Vec<Option<f64>>>,
}

impl PriceSeries {
    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Recombine the parallel series into bars.
    #[must_use]
    pub fn klines(&self) -> Vec<Kline> {
        self.dates
            .iter()
            .zip(&self.ohlc)
            .zip(&self.volumes)
            .map(|((date, ohlc), volume)| Kline {
                date: date.clone(),
                open: ohlc.open,
                high: ohlc.high,
                low: ohlc.low,
                close: ohlc.close,
                volume: *volume,
            })
            .collect()
    }
}
