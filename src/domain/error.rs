//! Error types for the journal application.

/// Top-level error type for tradelog.
///
/// The analytics core (stats, equity curve) is total and never produces
/// one of these; errors come from storage, config, import, and the
/// review service.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("database error: {reason}")]
    Database { reason: String },

    #[error("database query error: {reason}")]
    DatabaseQuery { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("CSV error at line {line}: {reason}")]
    Csv { line: u64, reason: String },

    #[error("invalid trade field {field}: {reason}")]
    InvalidTrade { field: String, reason: String },

    #[error("review service error: {reason}")]
    Insight { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&JournalError> for std::process::ExitCode {
    fn from(err: &JournalError) -> Self {
        let code: u8 = match err {
            JournalError::Io(_) => 1,
            JournalError::ConfigParse { .. }
            | JournalError::ConfigMissing { .. }
            | JournalError::ConfigInvalid { .. } => 2,
            JournalError::Database { .. } | JournalError::DatabaseQuery { .. } => 3,
            JournalError::Csv { .. } | JournalError::InvalidTrade { .. } => 4,
            JournalError::Insight { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
