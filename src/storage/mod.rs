pub mod json_backend;
pub mod memory;

use std::{fmt, io};

use thiserror::Error;

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Names of the durable records the ledger keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Entries,
    Categories,
}

impl RecordKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::Entries => "entries",
            RecordKey::Categories => "categories",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read `{key}` record: {source}")]
    Read {
        key: RecordKey,
        #[source]
        source: io::Error,
    },
    #[error("failed to write `{key}` record: {source}")]
    Write {
        key: RecordKey,
        #[source]
        source: io::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value storage holding one serialized payload per record.
pub trait StorageBackend: Send + Sync {
    /// Returns `Ok(None)` when the record has never been written.
    fn read_record(&self, key: RecordKey) -> Result<Option<String>>;

    /// Replaces the record payload. A failed write must leave the previous payload intact.
    fn write_record(&self, key: RecordKey, payload: &str) -> Result<()>;

    /// Human readable location used in logs and the CLI banner.
    fn location(&self) -> String;
}
