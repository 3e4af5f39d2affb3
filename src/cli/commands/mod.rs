pub mod category;
pub mod config;
pub mod system;
pub mod transaction;
pub mod view;

use crate::cli::core::ShellContext;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandRegistry;
use crate::cli::render;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in transaction::definitions()
        .into_iter()
        .chain(category::definitions())
        .chain(view::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

/// Startup header: where data lives and the current totals.
pub(crate) fn print_banner(context: &ShellContext) {
    output_section("Ledger View");
    match context.store.storage_location() {
        Some(location) => io::print_info(format!("  Data         : {}", location)),
        None => io::print_info("  Data         : in memory (not saved)"),
    }
    for line in render::summary_lines(&context.store.totals(), context.currency_symbol()) {
        io::print_info(line);
    }
    io::print_info("Type `help` to see available commands.");
}
