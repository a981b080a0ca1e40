//! Trader profile: account capital and risk limits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderProfile {
    pub initial_capital: f64,
    pub current_capital: f64,
    pub daily_goal: f64,
    pub weekly_goal: f64,
    pub max_daily_risk: f64,
    pub max_trade_risk: f64,
}

impl TraderProfile {
    /// Fresh profile with the given starting balance and no goals or
    /// risk limits set.
    pub fn new(initial_capital: f64) -> Self {
        TraderProfile {
            initial_capital,
            current_capital: initial_capital,
            daily_goal: 0.0,
            weekly_goal: 0.0,
            max_daily_risk: 0.0,
            max_trade_risk: 0.0,
        }
    }
}
