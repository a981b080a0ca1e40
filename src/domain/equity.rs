//! Equity curve: running account balance across the journal.

use chrono::NaiveDate;

use super::trade::Trade;

/// One point of the equity curve. `trade_no` is 1-based and `balance` is
/// the account balance after applying that trade's result.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub trade_no: usize,
    pub balance: f64,
    pub date: NaiveDate,
}

/// Build the equity curve in journal order, one point per trade.
///
/// Length-preserving: an empty journal yields an empty curve. The first
/// point already includes the first trade's result on top of
/// `initial_capital`.
pub fn equity_curve(trades: &[Trade], initial_capital: f64) -> Vec<EquityPoint> {
    let mut balance = initial_capital;
    trades
        .iter()
        .enumerate()
        .map(|(i, trade)| {
            balance += trade.result_usd;
            EquityPoint {
                trade_no: i + 1,
                balance,
                date: trade.date,
            }
        })
        .collect()
}
