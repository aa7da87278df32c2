// crates/tzfind-core/src/error.rs
use thiserror::Error;

/// Errors produced by tzfind-core.
#[derive(Debug, Error)]
pub enum TzFindError {
    /// The caller passed an argument the operation cannot work with
    /// (an empty table, `k == 0`, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A table row does not have the expected tab-separated layout.
    #[error("Malformed row {row:?}: {reason}")]
    MalformedRow { row: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The phrase extractor failed.
    #[error("Phrase extraction failed: {0}")]
    Extractor(String),

    /// The answer generator failed.
    #[error("Answer generation failed: {0}")]
    Generator(String),
}

impl TzFindError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TzFindError::InvalidArgument(msg.into())
    }

    pub(crate) fn malformed(row: &str, reason: impl Into<String>) -> Self {
        TzFindError::MalformedRow {
            row: row.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TzFindError>;
