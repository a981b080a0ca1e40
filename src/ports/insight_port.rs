//! Narrative-review port trait.

use crate::domain::error::JournalError;

/// External text-generation collaborator: one prompt in, prose out.
pub trait InsightPort {
    fn generate(&self, prompt: &str) -> Result<String, JournalError>;
}
