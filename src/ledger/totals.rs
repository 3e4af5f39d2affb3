use rust_decimal::Decimal;

use crate::domain::{Entry, EntryKind};

/// Aggregate figures derived from a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Sums income and expense amounts. No rounding is applied; sums saturate at the
/// `Decimal` bounds instead of overflowing.
pub fn compute_totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a Entry>,
{
    let (income, expense) = entries.into_iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expense), entry| match entry.kind {
            EntryKind::Income => (income.saturating_add(entry.amount), expense),
            EntryKind::Expense => (income, expense.saturating_add(entry.amount)),
        },
    );
    Totals {
        income,
        expense,
        balance: income.saturating_sub(expense),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn entry(id: i64, amount: Decimal, kind: EntryKind) -> Entry {
        Entry {
            id: EntryId(id),
            amount,
            kind,
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn empty_ledger_has_zero_totals() {
        assert_eq!(compute_totals(&Vec::new()), Totals::default());
    }

    #[test]
    fn totals_split_by_kind() {
        let entries = vec![
            entry(1, dec!(50.00), EntryKind::Income),
            entry(2, dec!(20.00), EntryKind::Expense),
            entry(3, dec!(0.10), EntryKind::Income),
            entry(4, dec!(0.20), EntryKind::Expense),
        ];
        let totals = compute_totals(&entries);
        assert_eq!(totals.income, dec!(50.10));
        assert_eq!(totals.expense, dec!(20.20));
        assert_eq!(totals.balance, dec!(29.90));
    }

    #[test]
    fn balance_can_go_negative() {
        let entries = vec![entry(1, dec!(5), EntryKind::Expense)];
        let totals = compute_totals(&entries);
        assert_eq!(totals.balance, dec!(-5));
        assert_eq!(totals.balance, totals.income - totals.expense);
    }

    #[test]
    fn huge_amounts_saturate_instead_of_overflowing() {
        let entries = vec![
            entry(1, Decimal::MAX, EntryKind::Income),
            entry(2, Decimal::MAX, EntryKind::Income),
            entry(3, Decimal::MAX, EntryKind::Expense),
            entry(4, dec!(1), EntryKind::Expense),
        ];
        let totals = compute_totals(&entries);
        assert_eq!(totals.income, Decimal::MAX);
        assert_eq!(totals.expense, Decimal::MAX);
        assert_eq!(totals.balance, Decimal::ZERO);

        let totals = compute_totals(&entries[2..]);
        assert_eq!(totals.balance, Decimal::MIN);
    }
}
