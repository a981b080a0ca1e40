//! Port traits at the application's seams.

pub mod config_port;
pub mod insight_port;
pub mod journal_port;
