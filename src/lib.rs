#![doc(test(attr(deny(warnings))))]

//! Ledger View records income and expense entries, derives running totals and
//! filtered listings, and keeps both collections in local durable storage.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Ledger View tracing initialized.");
    });
}
