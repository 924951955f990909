//! Metric computation settings.

use serde::{Deserialize, Serialize};

use crate::analytics::{DEFAULT_MA_PERIODS, TRADING_DAYS_PER_YEAR};

/// Metric computation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Annualization factor for the Sharpe ratio.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: f64,
    /// Moving-average periods computed over price bars.
    #[serde(default = "default_indicator_periods")]
    pub indicator_periods: Vec<usize>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            periods_per_year: default_periods_per_year(),
            indicator_periods: default_indicator_periods(),
        }
    }
}

const fn default_periods_per_year() -> f64 {
    TRADING_DAYS_PER_YEAR
}

fn default_indicator_periods() -> Vec<usize> {
    DEFAULT_MA_PERIODS.to_vec()
}
