//! Prompt construction for the narrative performance review.

use super::error::JournalError;
use super::profile::TraderProfile;
use super::trade::Trade;

/// Most recent trades included in a review request.
pub const MAX_PROMPT_TRADES: usize = 50;

/// Shown instead of calling the review service when the journal is empty.
pub const FALLBACK_EMPTY: &str =
    "Log some trades first so there is a history to analyse.";

/// Shown when the review service cannot be reached or returns garbage.
pub const FALLBACK_UNAVAILABLE: &str =
    "Could not reach the review service. Check your connection and API key, then try again.";

/// Build the mentor prompt: a short profile summary plus the most recent
/// trades as structured JSON, followed by the analysis directives.
pub fn build_prompt(trades: &[Trade], profile: &TraderProfile) -> Result<String, JournalError> {
    let start = trades.len().saturating_sub(MAX_PROMPT_TRADES);
    let recent = &trades[start..];

    let history = serde_json::to_string_pretty(recent).map_err(|e| JournalError::Insight {
        reason: format!("failed to serialize trade history: {e}"),
    })?;

    Ok(format!(
        "As a professional trading mentor and statistical analyst, review the \
following trade history and trader profile.\n\
\n\
Profile:\n\
- Initial capital: ${initial_capital}\n\
- Max risk per trade: {max_trade_risk}%\n\
\n\
Trade history (most recent {count}):\n\
{history}\n\
\n\
Your task:\n\
1. Identify recurring mistakes (technical or psychological).\n\
2. Identify the most profitable setups and trading hours.\n\
3. Flag overtrading or risk-management breaches.\n\
4. Give 3 practical adjustments to the trading plan.\n\
\n\
Format the answer as professional Markdown, direct and highly analytical.",
        initial_capital = profile.initial_capital,
        max_trade_risk = profile.max_trade_risk,
        count = recent.len(),
        history = history,
    ))
}
