#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use ledger_view::{
    config::Config,
    core::clock::FixedClock,
    domain::{CategorySet, EntryDraft, EntryKind},
    ledger::LedgerStore,
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Isolated application home; the directory is removed when the guard drops.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp home"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn data_dir(&self) -> PathBuf {
        Config::default().resolve_data_dir(self.dir.path())
    }

    pub fn storage(&self) -> JsonStorage {
        JsonStorage::new(self.data_dir()).expect("create json storage")
    }

    /// Opens a store over this home's data directory with the stock categories.
    pub fn open_store(&self) -> LedgerStore {
        LedgerStore::open(Box::new(self.storage()), &default_categories())
            .expect("open ledger store")
            .with_clock(FixedClock::on(day(2024, 3, 1)))
    }
}

pub fn default_categories() -> CategorySet {
    Config::default().default_category_set()
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn draft(amount: &str, kind: EntryKind, category: &str, date: &str) -> EntryDraft {
    EntryDraft::new(amount, kind, category).with_date(date)
}
