use thiserror::Error;

use crate::{config::ConfigError, domain::DraftError, storage::StorageError};

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid entry: {0}")]
    Draft(#[from] DraftError),
    #[error("Stored `{record}` record is corrupt: {source}")]
    CorruptRecord {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
