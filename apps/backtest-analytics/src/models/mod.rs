//! Typed value records for run artifacts and computed analytics.
//!
//! Every type here is a plain value object with no back-references. String
//! to number coercion has already happened by the time one is built.

mod equity;
mod market;
mod order;
mod performance;
mod position;
mod trade;

use std::collections::BTreeMap;

pub use equity::{DrawdownPoint, EquityPoint};
pub use market::{Kline, Ohlc, PriceSeries};
pub use order::{OrderRecord, OrderSide, Signal};
pub use performance::{MonthlyReturn, MonthlyReturns, PerformanceMetrics};
pub use position::PositionSnapshot;
pub use trade::{Pnl, RawTrade, TradeDirection, TradeRecord};

/// Free-form run metadata.
pub type RunInfo = BTreeMap<String, serde_json::Value>;
