//! Core domain types and logic.

pub mod trade;
pub mod profile;
pub mod stats;
pub mod equity;
pub mod insight;
pub mod trade_validation;
pub mod config_validation;
pub mod error;
