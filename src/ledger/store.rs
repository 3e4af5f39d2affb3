use tracing::{debug, info, warn};

use crate::{
    core::clock::{Clock, SystemClock},
    domain::{CategorySet, Entry, EntryDraft, EntryId, Filter},
    errors::LedgerError,
    storage::StorageBackend,
    utils::persistence::{load_state, save_state, LoadedState},
};

use super::{filter::filter_entries, totals::compute_totals, totals::Totals};

/// Read-only view of the ledger handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    pub entries: &'a [Entry],
    pub categories: &'a CategorySet,
}

impl<'a> LedgerSnapshot<'a> {
    pub fn totals(&self) -> Totals {
        compute_totals(self.entries)
    }

    pub fn filtered(&self, filter: &Filter) -> Vec<&'a Entry> {
        filter_entries(self.entries, filter)
    }
}

/// Owns the entries and categories of one ledger and writes them through to
/// storage after every successful mutation.
///
/// Entries are kept newest first. Persistence is fire-and-forget: a failed write is
/// logged and kept as a warning for the caller, but the in-memory mutation stands.
pub struct LedgerStore {
    entries: Vec<Entry>,
    categories: CategorySet,
    storage: Option<Box<dyn StorageBackend>>,
    clock: Box<dyn Clock>,
    last_issued: i64,
    persistence_warning: Option<String>,
}

impl LedgerStore {
    /// Loads the stored state once. Unreadable storage degrades to an in-memory session;
    /// a corrupt record is returned as an error.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        default_categories: &CategorySet,
    ) -> Result<Self, LedgerError> {
        match load_state(storage.as_ref(), default_categories) {
            Ok(state) => {
                info!(location = %storage.location(), entries = state.entries.len(), "ledger opened");
                Ok(Self::from_state(state, Some(storage)))
            }
            Err(LedgerError::Storage(err)) => {
                warn!(
                    location = %storage.location(),
                    error = %err,
                    "storage unreadable, continuing without persistence"
                );
                let mut store = Self::in_memory(default_categories);
                store.persistence_warning = Some(format!(
                    "{err}; changes will not be saved this session"
                ));
                Ok(store)
            }
            Err(err) => Err(err),
        }
    }

    /// A store that never touches durable storage.
    pub fn in_memory(default_categories: &CategorySet) -> Self {
        Self::from_state(
            LoadedState {
                entries: Vec::new(),
                categories: default_categories.clone(),
            },
            None,
        )
    }

    fn from_state(state: LoadedState, storage: Option<Box<dyn StorageBackend>>) -> Self {
        let last_issued = state
            .entries
            .iter()
            .map(|entry| entry.id.0)
            .max()
            .unwrap_or(i64::MIN);
        Self {
            entries: state.entries,
            categories: state.categories,
            storage,
            clock: Box::new(SystemClock),
            last_issued,
            persistence_warning: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            entries: &self.entries,
            categories: &self.categories,
        }
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.entries)
    }

    pub fn filtered(&self, filter: &Filter) -> Vec<&Entry> {
        filter_entries(&self.entries, filter)
    }

    pub fn find_entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Date used when a draft leaves the date blank.
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    pub fn storage_location(&self) -> Option<String> {
        self.storage.as_ref().map(|storage| storage.location())
    }

    /// Returns the most recent persistence problem, if any, and clears it.
    pub fn take_persistence_warning(&mut self) -> Option<String> {
        self.persistence_warning.take()
    }

    /// Validates the draft and records it as the newest entry.
    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<&Entry, LedgerError> {
        let id = self.candidate_id();
        let entry = draft.into_entry(id, self.clock.today())?;
        self.last_issued = id.0;
        debug!(id = %entry.id, kind = %entry.kind, category = %entry.category, "entry added");
        self.entries.insert(0, entry);
        self.persist();
        Ok(&self.entries[0])
    }

    /// Appends a trimmed category. Blank or already known names are ignored.
    pub fn add_category(&mut self, name: &str) -> bool {
        if !self.categories.insert(name) {
            debug!(name, "category ignored");
            return false;
        }
        debug!(name = name.trim(), "category added");
        self.persist();
        true
    }

    /// Removes the entry with `id`; unknown ids are ignored.
    pub fn delete_entry(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(index);
        debug!(id = %id, "entry deleted");
        self.persist();
        Some(removed)
    }

    fn candidate_id(&self) -> EntryId {
        let now = self.clock.now().timestamp_millis();
        EntryId(now.max(self.last_issued.saturating_add(1)))
    }

    fn persist(&mut self) {
        let Some(storage) = self.storage.as_deref() else {
            return;
        };
        match save_state(storage, &self.entries, &self.categories) {
            Ok(()) => {}
            Err(err) => {
                warn!(location = %storage.location(), error = %err, "failed to persist ledger state");
                self.persistence_warning = Some(err.to_string());
            }
        }
    }
}

impl std::fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStore")
            .field("entries", &self.entries.len())
            .field("categories", &self.categories)
            .field("storage", &self.storage_location())
            .finish()
    }
}
