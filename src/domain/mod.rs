//! Value types shared by the ledger store, persistence and the CLI.

pub mod category;
pub mod entry;
pub mod filter;

pub use category::CategorySet;
pub use entry::{
    parse_amount, parse_optional_date, DraftError, Entry, EntryDraft, EntryId, EntryKind,
    MAX_AMOUNT,
};
pub use filter::{Filter, UnknownFilter, ALL_SENTINEL};
