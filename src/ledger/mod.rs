//! Ledger state container and the pure computations derived from it.

pub mod filter;
pub mod store;
pub mod totals;
pub mod view;

pub use filter::filter_entries;
pub use store::{LedgerSnapshot, LedgerStore};
pub use totals::{compute_totals, Totals};
pub use view::ViewState;
