use std::{collections::HashMap, sync::RwLock};

use super::{RecordKey, Result, StorageBackend, StorageError};

/// In-process record storage for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<RecordKey, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record, e.g. with data produced by an earlier session.
    pub fn with_record(self, key: RecordKey, payload: impl Into<String>) -> Self {
        if let Ok(mut records) = self.records.write() {
            records.insert(key, payload.into());
        }
        self
    }
}

impl StorageBackend for MemoryStorage {
    fn read_record(&self, key: RecordKey) -> Result<Option<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".into()))?;
        Ok(records.get(&key).cloned())
    }

    fn write_record(&self, key: RecordKey, payload: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".into()))?;
        records.insert(key, payload.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".into()
    }
}
