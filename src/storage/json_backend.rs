use std::{fs, io, path::PathBuf};

use tracing::debug;

use super::{RecordKey, Result, StorageBackend, StorageError};
use crate::utils::atomic::write_atomic;

const RECORD_EXTENSION: &str = "json";

/// Filesystem-backed storage keeping each record in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> std::result::Result<Self, io::Error> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn record_path(&self, key: RecordKey) -> PathBuf {
        self.root
            .join(format!("{}.{}", key.as_str(), RECORD_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn read_record(&self, key: RecordKey) -> Result<Option<String>> {
        let path = self.record_path(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { key, source }),
        }
    }

    fn write_record(&self, key: RecordKey, payload: &str) -> Result<()> {
        let path = self.record_path(key);
        write_atomic(&path, payload).map_err(|source| StorageError::Write { key, source })?;
        debug!(record = %key, path = %path.display(), bytes = payload.len(), "record written");
        Ok(())
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
