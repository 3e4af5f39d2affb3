mod common;

use common::{day, default_categories, draft};
use ledger_view::{
    core::clock::FixedClock,
    domain::{DraftError, EntryId, EntryKind, Filter, MAX_AMOUNT},
    errors::LedgerError,
    ledger::{compute_totals, LedgerStore},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn store() -> LedgerStore {
    LedgerStore::in_memory(&default_categories()).with_clock(FixedClock::on(day(2024, 1, 10)))
}

fn seeded() -> LedgerStore {
    let mut store = store();
    store
        .add_entry(draft("50", EntryKind::Income, "Food", "2024-01-01"))
        .unwrap();
    store
        .add_entry(draft("20", EntryKind::Expense, "Food", "2024-01-02"))
        .unwrap();
    store
        .add_entry(draft("12.75", EntryKind::Expense, "Transport", "2024-01-03"))
        .unwrap();
    store
        .add_entry(draft("100", EntryKind::Income, "Utilities", "2023-12-31"))
        .unwrap();
    store
}

#[test]
fn entries_are_listed_newest_first_regardless_of_date() {
    let store = seeded();
    let categories: Vec<_> = store.entries().iter().map(|e| e.category.as_str()).collect();
    assert_eq!(categories, vec!["Utilities", "Transport", "Food", "Food"]);
    assert_eq!(store.entries()[0].date, day(2023, 12, 31));
}

#[test]
fn ids_are_unique_and_increasing_under_a_frozen_clock() {
    let store = seeded();
    let mut ids: Vec<EntryId> = store.entries().iter().map(|e| e.id).collect();
    ids.reverse();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn balance_is_income_minus_expense() {
    let store = seeded();
    let totals = store.totals();
    assert_eq!(totals.income, dec!(150));
    assert_eq!(totals.expense, dec!(32.75));
    assert_eq!(totals.balance, totals.income - totals.expense);
    assert!(totals.income >= Decimal::ZERO && totals.expense >= Decimal::ZERO);
}

#[test]
fn category_filters_partition_the_ledger() {
    let store = seeded();
    assert_eq!(store.filtered(&Filter::All).len(), store.entries().len());

    let mut covered = 0;
    for name in store.categories().iter() {
        let subset = store.filtered(&Filter::Category(name.to_string()));
        assert!(subset.iter().all(|entry| entry.category == name));
        covered += subset.len();
    }
    assert_eq!(covered, store.entries().len());
}

#[test]
fn filtered_totals_cover_only_the_subset() {
    let store = seeded();
    let food = store.filtered(&Filter::Category("Food".into()));
    let totals = compute_totals(food);
    assert_eq!(totals.balance, dec!(30));
    assert_eq!(store.totals().balance, dec!(117.25));
}

#[test]
fn adding_a_known_category_twice_is_a_no_op() {
    let mut store = store();
    assert!(store.add_category("Gifts"));
    let after_first = store.categories().clone();
    assert!(!store.add_category("Gifts"));
    assert!(!store.add_category("   "));
    assert_eq!(store.categories(), &after_first);
}

#[test]
fn deleting_twice_matches_deleting_once() {
    let mut store = seeded();
    let id = store.entries()[1].id;
    assert!(store.delete_entry(id).is_some());
    let after_first = store.entries().to_vec();
    assert!(store.delete_entry(id).is_none());
    assert_eq!(store.entries(), after_first.as_slice());
    assert!(store.find_entry(id).is_none());
}

#[test]
fn rejected_drafts_leave_the_ledger_untouched() {
    let mut store = seeded();
    let before = store.entries().to_vec();
    assert!(store.add_entry(draft("", EntryKind::Income, "Food", "")).is_err());
    assert!(store.add_entry(draft("abc", EntryKind::Income, "Food", "")).is_err());
    assert!(store.add_entry(draft("-5", EntryKind::Expense, "Food", "")).is_err());
    assert!(store
        .add_entry(draft("5", EntryKind::Expense, "Food", "2024-13-40"))
        .is_err());
    assert_eq!(store.entries(), before.as_slice());
}

#[test]
fn empty_date_defaults_to_today() {
    let mut store = store();
    let entry = store
        .add_entry(draft("5", EntryKind::Expense, "Food", ""))
        .unwrap();
    assert_eq!(entry.date, day(2024, 1, 10));
}

#[test]
fn add_then_delete_example_flow() {
    let mut store = store();
    store
        .add_entry(draft("50.00", EntryKind::Income, "Food", "2024-01-01"))
        .unwrap();
    store
        .add_entry(
            draft("20.00", EntryKind::Expense, "Food", "2024-01-02")
                .with_description("Weekly shop"),
        )
        .unwrap();
    assert_eq!(store.totals().balance, dec!(30));

    let newest = store.entries()[0].id;
    store.delete_entry(newest);
    let totals = store.totals();
    assert_eq!(totals.income, dec!(50));
    assert_eq!(totals.expense, Decimal::ZERO);
    assert_eq!(totals.balance, dec!(50));
}

#[test]
fn totals_stay_available_at_the_amount_cap() {
    let mut store = store();
    for _ in 0..3 {
        store
            .add_entry(draft("1000000000000000", EntryKind::Income, "Food", ""))
            .unwrap();
    }
    let err = store
        .add_entry(draft("50000000000000000000000000000", EntryKind::Income, "Food", ""))
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Draft(DraftError::AmountTooLarge(_))
    ));

    let totals = store.totals();
    assert_eq!(totals.income, MAX_AMOUNT * Decimal::from(3));
    assert_eq!(totals.balance, totals.income);
    assert_eq!(store.entries().len(), 3);
}
