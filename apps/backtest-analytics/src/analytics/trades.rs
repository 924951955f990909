//! Trade list post-processing.

use crate::models::{OrderRecord, RawTrade, Signal, TradeRecord};

/// Assign dense 1-based ids and running cumulative P&L, in input order.
#[must_use]
pub fn process_trades(raw_trades: &[RawTrade]) -> Vec<TradeRecord> {
    let mut cumulative_pnl = 0.0;

    raw_trades
        .iter()
        .zip(1u64..)
        .map(|(trade, id)| {
            cumulative_pnl += trade.pnl;
            TradeRecord {
                id,
                datetime: trade.datetime.clone(),
                direction: trade.direction,
                price: trade.price,
                size: trade.size,
                value: trade.value,
                commission: trade.commission,
                pnl: trade.pnl,
                pnlcomm: trade.pnlcomm,
                barlen: trade.barlen,
                cumulative_pnl,
            }
        })
        .collect()
}

/// One buy/sell signal per completed order, in order-log order.
#[must_use]
pub fn extract_signals(orders: &[OrderRecord]) -> Vec<Signal> {
    orders
        .iter()
        .map(|order| Signal {
            date: order.dt.clone(),
            signal_type: order.order_type,
            price: order.executed_price,
            size: order.size.abs(),
        })
        .collect()
}
