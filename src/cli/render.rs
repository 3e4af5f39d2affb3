//! Text rendering of ledger views for the shell.

use colored::Colorize;
use rust_decimal::Decimal;

use crate::{
    currency::{format_date, format_money, format_signed},
    domain::{Entry, EntryKind, Filter},
    ledger::Totals,
};

pub const EMPTY_LIST_MESSAGE: &str = "No transactions found";
pub const EMPTY_LIST_HINT: &str = "Add your first transaction with `add`.";

const AMOUNT_WIDTH: usize = 12;

/// Balance, income and expense lines, balance coloured by sign.
pub fn summary_lines(totals: &Totals, symbol: &str) -> Vec<String> {
    let balance = format_money(totals.balance, symbol);
    let balance = if totals.balance >= Decimal::ZERO {
        balance.bright_blue().bold()
    } else {
        balance.bright_red().bold()
    };
    vec![
        format!("  Current balance : {}", balance),
        format!(
            "  Total income    : +{}",
            format_money(totals.income, symbol)
        ),
        format!(
            "  Total expenses  : -{}",
            format_money(totals.expense, symbol)
        ),
    ]
}

/// One row per entry: id, date, category, signed amount and description.
pub fn entry_line(entry: &Entry, symbol: &str) -> String {
    let amount = amount_cell(entry, symbol);
    let amount = match entry.kind {
        EntryKind::Income => amount.bright_blue(),
        EntryKind::Expense => amount.bright_red(),
    };
    let mut line = format!(
        "  [{}] {:<13} {:<16} {}",
        entry.id,
        format_date(entry.date),
        entry.category,
        amount
    );
    if !entry.description.is_empty() {
        line.push_str("  ");
        line.push_str(&entry.description);
    }
    line
}

/// Signed amount right-aligned to the column width. Padding happens before any
/// colour codes are added.
fn amount_cell(entry: &Entry, symbol: &str) -> String {
    format!(
        "{:>width$}",
        format_signed(entry.amount, entry.kind, symbol),
        width = AMOUNT_WIDTH
    )
}

pub fn list_title(filter: &Filter, shown: usize, total: usize) -> String {
    match filter {
        Filter::All => format!("Transactions ({})", total),
        Filter::Category(name) => format!("Transactions in {} ({} of {})", name, shown, total),
    }
}
