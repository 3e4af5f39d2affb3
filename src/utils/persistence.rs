use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    domain::{CategorySet, Entry},
    errors::LedgerError,
    storage::{RecordKey, StorageBackend},
};

/// State recovered from storage at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedState {
    pub entries: Vec<Entry>,
    pub categories: CategorySet,
}

/// Reads both records. Absent records keep their defaults; unparsable ones are fatal.
pub fn load_state(
    backend: &dyn StorageBackend,
    default_categories: &CategorySet,
) -> Result<LoadedState, LedgerError> {
    let entries: Vec<Entry> = read_record(backend, RecordKey::Entries)?.unwrap_or_default();
    let categories = read_record(backend, RecordKey::Categories)?
        .unwrap_or_else(|| default_categories.clone());
    info!(
        location = %backend.location(),
        entries = entries.len(),
        categories = categories.len(),
        "ledger state loaded"
    );
    Ok(LoadedState {
        entries,
        categories,
    })
}

/// Serializes both collections, then writes both records.
pub fn save_state(
    backend: &dyn StorageBackend,
    entries: &[Entry],
    categories: &CategorySet,
) -> Result<(), LedgerError> {
    let entries_json = serde_json::to_string(entries)?;
    let categories_json = serde_json::to_string(categories)?;
    backend.write_record(RecordKey::Entries, &entries_json)?;
    backend.write_record(RecordKey::Categories, &categories_json)?;
    debug!(entries = entries.len(), categories = categories.len(), "ledger state saved");
    Ok(())
}

fn read_record<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: RecordKey,
) -> Result<Option<T>, LedgerError> {
    let Some(raw) = backend.read_record(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| LedgerError::CorruptRecord {
            record: key.as_str(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, EntryKind};
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn defaults() -> CategorySet {
        CategorySet::from_names(["Food", "Utilities"])
    }

    #[test]
    fn empty_storage_yields_defaults() {
        let storage = MemoryStorage::new();
        let state = load_state(&storage, &defaults()).unwrap();
        assert!(state.entries.is_empty());
        assert_eq!(state.categories, defaults());
    }

    #[test]
    fn stored_categories_override_defaults() {
        let storage = MemoryStorage::new().with_record(RecordKey::Categories, r#"["Rent"]"#);
        let state = load_state(&storage, &defaults()).unwrap();
        assert_eq!(state.categories.as_slice(), ["Rent"]);
    }

    #[test]
    fn corrupt_record_is_reported_by_name() {
        let storage = MemoryStorage::new().with_record(RecordKey::Entries, "{not json");
        let err = load_state(&storage, &defaults()).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::CorruptRecord {
                record: "entries",
                ..
            }
        ));
    }

    #[test]
    fn save_then_load_restores_state() {
        let storage = MemoryStorage::new();
        let entries = vec![Entry {
            id: EntryId(42),
            amount: dec!(19.25),
            kind: EntryKind::Expense,
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            description: "Lunch".into(),
        }];
        let mut categories = defaults();
        categories.insert("Gifts");

        save_state(&storage, &entries, &categories).unwrap();
        let state = load_state(&storage, &CategorySet::new()).unwrap();
        assert_eq!(state.entries, entries);
        assert_eq!(state.categories, categories);
    }
}
