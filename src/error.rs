//! Error types for the picker.

use thiserror::Error;

/// Errors surfaced by the picker core.
///
/// Read-side problems (missing or corrupted history) never appear here: they
/// degrade to an empty history at the store boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LottoError {
    /// The sampler was asked for more distinct values than the domain holds.
    #[error("Invalid argument: cannot draw {count} distinct values from a domain of {domain}")]
    InvalidArgument { count: usize, domain: usize },

    /// A pick that is not five valid games was offered for storage.
    #[error("Invalid pick: {0}")]
    InvalidPick(String),

    /// A write to the key-value store failed (quota exceeded, storage disabled).
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Encoding data for storage failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LottoError {
    pub fn storage_write(message: impl Into<String>) -> Self {
        Self::StorageWrite(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_json::Error> for LottoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LottoError>;
