//! Trade record and its outcome classifications.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of the position taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "BUY",
            TradeType::Sell => "SELL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Some(TradeType::Buy),
            "SELL" => Some(TradeType::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome classification. Mutually exclusive; the stats engine trusts this
/// tag for partitioning and `result_usd` for magnitude, independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeResult {
    Gain,
    Loss,
    BreakEven,
}

impl TradeResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeResult::Gain => "GAIN",
            TradeResult::Loss => "LOSS",
            TradeResult::BreakEven => "BREAK_EVEN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GAIN" => Some(TradeResult::Gain),
            "LOSS" => Some(TradeResult::Loss),
            "BREAK_EVEN" | "BE" => Some(TradeResult::BreakEven),
            _ => None,
        }
    }
}

impl std::fmt::Display for TradeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotional state recorded before, during, and after a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Emotion {
    Calm,
    Anxious,
    Confident,
    Fearful,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Calm => "CALM",
            Emotion::Anxious => "ANXIOUS",
            Emotion::Confident => "CONFIDENT",
            Emotion::Fearful => "FEARFUL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CALM" => Some(Emotion::Calm),
            "ANXIOUS" => Some(Emotion::Anxious),
            "CONFIDENT" => Some(Emotion::Confident),
            "FEARFUL" => Some(Emotion::Fearful),
            _ => None,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of execution mistake attributed to the trade, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MistakeKind {
    Technical,
    Psychological,
    None,
}

impl MistakeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MistakeKind::Technical => "TECHNICAL",
            MistakeKind::Psychological => "PSYCHOLOGICAL",
            MistakeKind::None => "NONE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "TECHNICAL" => Some(MistakeKind::Technical),
            "PSYCHOLOGICAL" => Some(MistakeKind::Psychological),
            "NONE" => Some(MistakeKind::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for MistakeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single journalled trade. Immutable once stored; the analytics only
/// ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub date: NaiveDate,
    pub entry_time: String,
    pub exit_time: String,
    pub asset: String,
    pub timeframe: String,
    pub trade_type: TradeType,
    pub setup: String,
    pub confluences: Vec<String>,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_pct: f64,
    pub risk_usd: f64,
    pub result: TradeResult,
    pub result_pips: f64,
    pub result_usd: f64,
    pub result_pct: f64,
    pub rr_planned: f64,
    pub rr_actual: f64,
    pub emotion_before: Emotion,
    pub emotion_during: Emotion,
    pub emotion_after: Emotion,
    pub plan_followed: bool,
    pub mistake: MistakeKind,
    pub mistake_details: Vec<String>,
    pub notes: String,
    pub images: Vec<String>,
}
