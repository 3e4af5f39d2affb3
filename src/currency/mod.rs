//! Presentation helpers for amounts and dates. Values are only rounded here.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::EntryKind;

/// Number of decimal places shown for every amount.
pub const DISPLAY_PRECISION: u32 = 2;

fn rounded(amount: Decimal) -> Decimal {
    let mut value =
        amount.round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(DISPLAY_PRECISION);
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}

/// Renders `amount` with the currency symbol in front, e.g. `$50.00` or `$-10.00`.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, rounded(amount))
}

/// Renders an unsigned amount prefixed with `+` for income and `-` for expenses.
pub fn format_signed(amount: Decimal, kind: EntryKind, symbol: &str) -> String {
    let sign = match kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    };
    format!("{}{}", sign, format_money(amount.abs(), symbol))
}

/// Medium US date, e.g. `Jan 1, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_is_rounded_to_two_places() {
        assert_eq!(format_money(dec!(30), "$"), "$30.00");
        assert_eq!(format_money(dec!(2.005), "$"), "$2.01");
        assert_eq!(format_money(dec!(-10), "$"), "$-10.00");
        assert_eq!(format_money(dec!(-0.001), "€"), "€0.00");
    }

    #[test]
    fn signed_amounts_follow_entry_kind() {
        assert_eq!(format_signed(dec!(50), EntryKind::Income, "$"), "+$50.00");
        assert_eq!(format_signed(dec!(20.5), EntryKind::Expense, "$"), "-$20.50");
    }

    #[test]
    fn dates_use_short_month_names() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(date), "Jan 1, 2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_date(date), "Dec 31, 2023");
        let date = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();
        assert_eq!(format_date(date), "Sep 5, 2024");
    }
}
