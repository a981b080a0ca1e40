//! Field-level validation of incoming trade records.
//!
//! This is the data-loading concern that sits upstream of the stats
//! engine: the engine itself never validates. Hard violations are
//! errors; a `result` tag that disagrees with the sign of `result_usd`
//! is legal input for the engine and only produces a warning here.

use super::error::JournalError;
use super::trade::{Trade, TradeResult};

/// Validate one trade record. Returns non-fatal warnings on success.
pub fn validate_trade(trade: &Trade) -> Result<Vec<String>, JournalError> {
    validate_id(trade)?;
    validate_asset(trade)?;
    validate_risk(trade)?;
    validate_prices(trade)?;
    Ok(collect_warnings(trade))
}

fn validate_id(trade: &Trade) -> Result<(), JournalError> {
    if trade.id.trim().is_empty() {
        return Err(JournalError::InvalidTrade {
            field: "id".to_string(),
            reason: "id must not be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_asset(trade: &Trade) -> Result<(), JournalError> {
    if trade.asset.trim().is_empty() {
        return Err(JournalError::InvalidTrade {
            field: "asset".to_string(),
            reason: "asset must not be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_risk(trade: &Trade) -> Result<(), JournalError> {
    if !(0.0..=100.0).contains(&trade.risk_pct) {
        return Err(JournalError::InvalidTrade {
            field: "risk_pct".to_string(),
            reason: "risk_pct must be between 0 and 100".to_string(),
        });
    }
    if trade.risk_usd < 0.0 {
        return Err(JournalError::InvalidTrade {
            field: "risk_usd".to_string(),
            reason: "risk_usd must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_prices(trade: &Trade) -> Result<(), JournalError> {
    for (field, value) in [
        ("entry_price", trade.entry_price),
        ("stop_loss", trade.stop_loss),
        ("take_profit", trade.take_profit),
    ] {
        if value < 0.0 {
            return Err(JournalError::InvalidTrade {
                field: field.to_string(),
                reason: "price must be non-negative".to_string(),
            });
        }
    }
    Ok(())
}

fn collect_warnings(trade: &Trade) -> Vec<String> {
    let mut warnings = Vec::new();

    if !sign_consistent(trade.result, trade.result_usd) {
        warnings.push(format!(
            "trade {}: result tag {} disagrees with result_usd {}",
            trade.id, trade.result, trade.result_usd
        ));
    }

    if trade.mistake == super::trade::MistakeKind::None && !trade.mistake_details.is_empty() {
        warnings.push(format!(
            "trade {}: mistake details given but mistake kind is NONE",
            trade.id
        ));
    }

    warnings
}

/// Whether the classification tag matches the sign of the realized P&L.
pub fn sign_consistent(result: TradeResult, result_usd: f64) -> bool {
    match result {
        TradeResult::Gain => result_usd > 0.0,
        TradeResult::Loss => result_usd < 0.0,
        TradeResult::BreakEven => result_usd == 0.0,
    }
}
