//! Aggregate performance statistics over the journal.

use super::trade::{Trade, TradeResult};

/// Aggregate risk/performance metrics for an ordered trade history.
///
/// A value object: freshly computed on every call, no identity beyond
/// the call that produced it. All fields are zero for an empty journal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateStats {
    pub total_pnl: f64,
    /// Percentage of GAIN trades over ALL trades, 0-100. Break-evens stay
    /// in the denominator and dilute the rate.
    pub win_rate: f64,
    /// Probability-weighted average profit per trade, weighted by the
    /// same diluted win rate.
    pub expectancy: f64,
    /// Largest peak-to-trough decline of the cumulative P&L curve,
    /// anchored at a zero baseline rather than the account balance.
    pub max_drawdown: f64,
    pub avg_rr: f64,
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
    pub avg_win: f64,
    /// Mean loss magnitude, reported as a non-negative number.
    pub avg_loss: f64,
    pub total_trades: usize,
}

impl AggregateStats {
    /// Compute aggregate statistics in a single forward pass.
    ///
    /// Total over its domain: every empty-partition case resolves to 0
    /// rather than an error. Streaks and drawdown follow the input order
    /// as given; everything else is order-independent.
    pub fn compute(trades: &[Trade]) -> Self {
        if trades.is_empty() {
            return AggregateStats::default();
        }

        let mut wins = 0usize;
        let mut losses = 0usize;
        let mut total_pnl = 0.0_f64;
        let mut win_sum = 0.0_f64;
        let mut loss_sum = 0.0_f64;
        let mut rr_sum = 0.0_f64;

        let mut current_win_streak = 0usize;
        let mut current_loss_streak = 0usize;
        let mut max_win_streak = 0usize;
        let mut max_loss_streak = 0usize;

        let mut running_pnl = 0.0_f64;
        let mut peak = 0.0_f64;
        let mut max_drawdown = 0.0_f64;

        for trade in trades {
            total_pnl += trade.result_usd;
            rr_sum += trade.rr_actual;

            match trade.result {
                TradeResult::Gain => {
                    wins += 1;
                    win_sum += trade.result_usd;
                    current_win_streak += 1;
                    current_loss_streak = 0;
                    if current_win_streak > max_win_streak {
                        max_win_streak = current_win_streak;
                    }
                }
                TradeResult::Loss => {
                    losses += 1;
                    loss_sum += trade.result_usd.abs();
                    current_loss_streak += 1;
                    current_win_streak = 0;
                    if current_loss_streak > max_loss_streak {
                        max_loss_streak = current_loss_streak;
                    }
                }
                // A break-even terminates both streaks; it counts as
                // neither a win nor a loss.
                TradeResult::BreakEven => {
                    current_win_streak = 0;
                    current_loss_streak = 0;
                }
            }

            running_pnl += trade.result_usd;
            if running_pnl > peak {
                peak = running_pnl;
            }
            let drawdown = peak - running_pnl;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        let total_trades = trades.len();
        let win_rate = wins as f64 / total_trades as f64 * 100.0;

        let avg_win = if wins > 0 { win_sum / wins as f64 } else { 0.0 };
        let avg_loss = if losses > 0 {
            loss_sum / losses as f64
        } else {
            0.0
        };

        let loss_rate = 1.0 - win_rate / 100.0;
        let expectancy = (win_rate / 100.0) * avg_win - loss_rate * avg_loss;

        let avg_rr = rr_sum / total_trades as f64;

        AggregateStats {
            total_pnl,
            win_rate,
            expectancy,
            max_drawdown,
            avg_rr,
            max_win_streak,
            max_loss_streak,
            avg_win,
            avg_loss,
            total_trades,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    use crate::domain::trade::{Emotion, MistakeKind, TradeType};

    fn make_trade(result: TradeResult, result_usd: f64, rr_actual: f64) -> Trade {
        Trade {
            id: "t1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            entry_time: "09:30".to_string(),
            exit_time: "10:15".to_string(),
            asset: "EURUSD".to_string(),
            timeframe: "M15".to_string(),
            trade_type: TradeType::Buy,
            setup: "Pullback".to_string(),
            confluences: vec![],
            entry_price: 1.0850,
            stop_loss: 1.0820,
            take_profit: 1.0910,
            risk_pct: 1.0,
            risk_usd: 100.0,
            result,
            result_pips: 0.0,
            result_usd,
            result_pct: 0.0,
            rr_planned: 2.0,
            rr_actual,
            emotion_before: Emotion::Calm,
            emotion_during: Emotion::Calm,
            emotion_after: Emotion::Calm,
            plan_followed: true,
            mistake: MistakeKind::None,
            mistake_details: vec![],
            notes: String::new(),
            images: vec![],
        }
    }

    fn gain(usd: f64) -> Trade {
        make_trade(TradeResult::Gain, usd, 0.0)
    }

    fn loss(usd: f64) -> Trade {
        make_trade(TradeResult::Loss, usd, 0.0)
    }

    fn break_even() -> Trade {
        make_trade(TradeResult::BreakEven, 0.0, 0.0)
    }

    #[test]
    fn empty_journal_is_all_zero() {
        let stats = AggregateStats::compute(&[]);
        assert_eq!(stats, AggregateStats::default());
        assert_eq!(stats.total_trades, 0);
        assert!((stats.win_rate - 0.0).abs() < f64::EPSILON);
        assert!((stats.expectancy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn alternating_wins_and_losses() {
        // +100 G, -50 L, +100 G, -50 L
        let trades = vec![gain(100.0), loss(-50.0), gain(100.0), loss(-50.0)];
        let stats = AggregateStats::compute(&trades);

        assert_relative_eq!(stats.total_pnl, 100.0);
        assert_relative_eq!(stats.win_rate, 50.0);
        assert_relative_eq!(stats.avg_win, 100.0);
        assert_relative_eq!(stats.avg_loss, 50.0);
        assert_eq!(stats.max_win_streak, 1);
        assert_eq!(stats.max_loss_streak, 1);
        // running P&L 100, 50, 150, 100 against peaks 100, 100, 150, 150
        assert_relative_eq!(stats.max_drawdown, 50.0);
        assert_eq!(stats.total_trades, 4);
    }

    #[test]
    fn expectancy_weights_by_diluted_win_rate() {
        let trades = vec![gain(100.0), loss(-50.0), gain(100.0), loss(-50.0)];
        let stats = AggregateStats::compute(&trades);
        // 0.5 * 100 - 0.5 * 50
        assert_relative_eq!(stats.expectancy, 25.0);
    }

    #[test]
    fn break_evens_dilute_win_rate_and_expectancy() {
        let trades = vec![gain(100.0), break_even(), break_even(), break_even()];
        let stats = AggregateStats::compute(&trades);

        assert_relative_eq!(stats.win_rate, 25.0);
        // avg_loss is 0, so expectancy is 0.25 * 100
        assert_relative_eq!(stats.expectancy, 25.0);
    }

    #[test]
    fn single_break_even_trade() {
        let stats = AggregateStats::compute(&[break_even()]);

        assert_eq!(stats.total_trades, 1);
        assert!((stats.total_pnl - 0.0).abs() < f64::EPSILON);
        assert!((stats.win_rate - 0.0).abs() < f64::EPSILON);
        assert!((stats.avg_win - 0.0).abs() < f64::EPSILON);
        assert!((stats.avg_loss - 0.0).abs() < f64::EPSILON);
        assert!((stats.expectancy - 0.0).abs() < f64::EPSILON);
        assert!((stats.max_drawdown - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.max_win_streak, 0);
        assert_eq!(stats.max_loss_streak, 0);
    }

    #[test]
    fn all_gains_gives_full_win_rate() {
        let trades = vec![gain(50.0), gain(75.0), gain(25.0)];
        let stats = AggregateStats::compute(&trades);

        assert_relative_eq!(stats.win_rate, 100.0);
        assert_eq!(stats.max_win_streak, 3);
        assert_eq!(stats.max_loss_streak, 0);
        assert!((stats.avg_loss - 0.0).abs() < f64::EPSILON);
        // strictly rising cumulative P&L never leaves its peak
        assert!((stats.max_drawdown - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_losses_gives_zero_win_rate() {
        let trades = vec![loss(-40.0), loss(-60.0)];
        let stats = AggregateStats::compute(&trades);

        assert_relative_eq!(stats.win_rate, 0.0);
        assert_relative_eq!(stats.avg_win, 0.0);
        assert_relative_eq!(stats.avg_loss, 50.0);
        assert_eq!(stats.max_loss_streak, 2);
        // expectancy = -1.0 * avg_loss
        assert_relative_eq!(stats.expectancy, -50.0);
        assert_relative_eq!(stats.max_drawdown, 100.0);
    }

    #[test]
    fn break_even_resets_both_streaks() {
        let trades = vec![
            gain(10.0),
            gain(10.0),
            gain(10.0),
            break_even(),
            gain(10.0),
            loss(-10.0),
            loss(-10.0),
            break_even(),
            loss(-10.0),
        ];
        let stats = AggregateStats::compute(&trades);

        // the BE after three wins does not decrement the recorded max
        assert_eq!(stats.max_win_streak, 3);
        assert_eq!(stats.max_loss_streak, 2);
    }

    #[test]
    fn drawdown_measured_from_cumulative_pnl_peak() {
        // running P&L: 100, 250, 150, 50, 120 -> peak 250, trough 50
        let trades = vec![
            gain(100.0),
            gain(150.0),
            loss(-100.0),
            loss(-100.0),
            gain(70.0),
        ];
        let stats = AggregateStats::compute(&trades);
        assert_relative_eq!(stats.max_drawdown, 200.0);
    }

    #[test]
    fn drawdown_from_losses_at_start() {
        // peak stays at the zero baseline while under water
        let trades = vec![loss(-30.0), loss(-20.0), gain(10.0)];
        let stats = AggregateStats::compute(&trades);
        assert_relative_eq!(stats.max_drawdown, 50.0);
    }

    #[test]
    fn avg_rr_spans_all_trades() {
        let trades = vec![
            make_trade(TradeResult::Gain, 100.0, 3.0),
            make_trade(TradeResult::Loss, -50.0, -1.0),
            make_trade(TradeResult::BreakEven, 0.0, 0.0),
        ];
        let stats = AggregateStats::compute(&trades);
        assert_relative_eq!(stats.avg_rr, (3.0 - 1.0) / 3.0);
    }

    #[test]
    fn classification_tag_wins_over_sign() {
        // a mis-tagged row: classified GAIN but negative result_usd.
        // partitioning follows the tag, magnitude follows the number.
        let trades = vec![make_trade(TradeResult::Gain, -25.0, 0.0)];
        let stats = AggregateStats::compute(&trades);

        assert_relative_eq!(stats.win_rate, 100.0);
        assert_relative_eq!(stats.avg_win, -25.0);
        assert_relative_eq!(stats.total_pnl, -25.0);
    }

    #[test]
    fn compute_is_pure() {
        let trades = vec![gain(100.0), loss(-50.0), break_even(), gain(30.0)];
        let first = AggregateStats::compute(&trades);
        let second = AggregateStats::compute(&trades);
        assert_eq!(first, second);
    }
}
