//! Configuration validation.
//!
//! Checked before any command touches the store or the review service.

use crate::domain::error::JournalError;
use crate::ports::config_port::ConfigPort;

pub fn validate_store_config(config: &dyn ConfigPort) -> Result<(), JournalError> {
    validate_sqlite_path(config)?;
    validate_pool_size(config)?;
    Ok(())
}

pub fn validate_review_config(config: &dyn ConfigPort) -> Result<(), JournalError> {
    validate_api_key(config)?;
    validate_temperature(config)?;
    validate_top_p(config)?;
    validate_max_trades(config)?;
    Ok(())
}

fn validate_sqlite_path(config: &dyn ConfigPort) -> Result<(), JournalError> {
    match config.get_string("sqlite", "path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(JournalError::ConfigMissing {
            section: "sqlite".to_string(),
            key: "path".to_string(),
        }),
    }
}

fn validate_pool_size(config: &dyn ConfigPort) -> Result<(), JournalError> {
    let value = config.get_int("sqlite", "pool_size", 4);
    if value < 1 {
        return Err(JournalError::ConfigInvalid {
            section: "sqlite".to_string(),
            key: "pool_size".to_string(),
            reason: "pool_size must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_api_key(config: &dyn ConfigPort) -> Result<(), JournalError> {
    match config.get_string("gemini", "api_key") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(JournalError::ConfigMissing {
            section: "gemini".to_string(),
            key: "api_key".to_string(),
        }),
    }
}

fn validate_temperature(config: &dyn ConfigPort) -> Result<(), JournalError> {
    let value = config.get_double("gemini", "temperature", 0.7);
    if !(0.0..=2.0).contains(&value) {
        return Err(JournalError::ConfigInvalid {
            section: "gemini".to_string(),
            key: "temperature".to_string(),
            reason: "temperature must be between 0 and 2".to_string(),
        });
    }
    Ok(())
}

fn validate_top_p(config: &dyn ConfigPort) -> Result<(), JournalError> {
    let value = config.get_double("gemini", "top_p", 0.95);
    if !(0.0..=1.0).contains(&value) {
        return Err(JournalError::ConfigInvalid {
            section: "gemini".to_string(),
            key: "top_p".to_string(),
            reason: "top_p must be between 0 and 1".to_string(),
        });
    }
    Ok(())
}

fn validate_max_trades(config: &dyn ConfigPort) -> Result<(), JournalError> {
    let value = config.get_int("gemini", "max_trades", 50);
    if value < 1 {
        return Err(JournalError::ConfigInvalid {
            section: "gemini".to_string(),
            key: "max_trades".to_string(),
            reason: "max_trades must be at least 1".to_string(),
        });
    }
    Ok(())
}
