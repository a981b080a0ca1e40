//! Journal persistence port trait.

use crate::domain::error::JournalError;
use crate::domain::profile::TraderProfile;
use crate::domain::trade::Trade;

/// Store for trades and the trader profile.
///
/// `list_trades` must return trades in insertion order: the streak and
/// drawdown passes of the stats engine are defined over the journal's
/// given order, not a date sort.
pub trait JournalPort {
    fn insert_trade(&self, trade: &Trade) -> Result<(), JournalError>;

    fn list_trades(&self) -> Result<Vec<Trade>, JournalError>;

    /// Returns true when a trade with that id existed and was removed.
    fn delete_trade(&self, id: &str) -> Result<bool, JournalError>;

    fn load_profile(&self) -> Result<Option<TraderProfile>, JournalError>;

    fn save_profile(&self, profile: &TraderProfile) -> Result<(), JournalError>;
}
