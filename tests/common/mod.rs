#![allow(dead_code)]

use chrono::NaiveDate;
use std::cell::RefCell;
use tradelog::domain::error::JournalError;
use tradelog::domain::profile::TraderProfile;
use tradelog::domain::trade::{Emotion, MistakeKind, Trade, TradeResult, TradeType};
use tradelog::ports::insight_port::InsightPort;

/// Canned insight backend. Records prompts so tests can assert on what
/// was sent without any network involvement.
pub struct MockInsightPort {
    pub response: Option<String>,
    pub error: Option<String>,
    pub prompts: RefCell<Vec<String>>,
}

impl MockInsightPort {
    pub fn with_response(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            error: None,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn with_error(reason: &str) -> Self {
        Self {
            response: None,
            error: Some(reason.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl InsightPort for MockInsightPort {
    fn generate(&self, prompt: &str) -> Result<String, JournalError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        if let Some(reason) = &self.error {
            return Err(JournalError::Insight {
                reason: reason.clone(),
            });
        }
        Ok(self.response.clone().unwrap_or_default())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A filled-in trade with sensible defaults. Tests override the fields
/// they care about.
pub fn make_trade(id: &str, result: TradeResult, result_usd: f64) -> Trade {
    Trade {
        id: id.to_string(),
        date: date(2024, 3, 1),
        entry_time: "09:30".to_string(),
        exit_time: "11:00".to_string(),
        asset: "EURUSD".to_string(),
        timeframe: "M15".to_string(),
        trade_type: TradeType::Buy,
        setup: "Breakout".to_string(),
        confluences: vec!["Trend".to_string(), "Support".to_string()],
        entry_price: 1.0850,
        stop_loss: 1.0820,
        take_profit: 1.0910,
        risk_pct: 1.0,
        risk_usd: 100.0,
        result,
        result_pips: result_usd / 10.0,
        result_usd,
        result_pct: result_usd / 100.0,
        rr_planned: 2.0,
        rr_actual: result_usd / 100.0,
        emotion_before: Emotion::Calm,
        emotion_during: Emotion::Confident,
        emotion_after: Emotion::Calm,
        plan_followed: true,
        mistake: MistakeKind::None,
        mistake_details: Vec::new(),
        notes: String::new(),
        images: Vec::new(),
    }
}

pub fn make_dated_trade(id: &str, d: NaiveDate, result: TradeResult, result_usd: f64) -> Trade {
    let mut trade = make_trade(id, result, result_usd);
    trade.date = d;
    trade
}

pub fn sample_profile() -> TraderProfile {
    TraderProfile {
        initial_capital: 10_000.0,
        current_capital: 10_250.0,
        daily_goal: 100.0,
        weekly_goal: 400.0,
        max_daily_risk: 3.0,
        max_trade_risk: 1.0,
    }
}
