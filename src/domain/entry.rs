use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session-unique identifier of an entry, expressed as a millisecond timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

/// Direction of money flow for an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(EntryKind::Income),
            "expense" | "out" => Ok(EntryKind::Expense),
            other => Err(DraftError::UnknownKind(other.to_string())),
        }
    }
}

/// A recorded income or expense transaction. Entries never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Entry {
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

/// Reasons a submitted draft is rejected before it reaches the ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("amount is required")]
    MissingAmount,
    #[error("amount `{0}` is not a number")]
    InvalidAmount(String),
    #[error("amount `{0}` must not be negative")]
    NegativeAmount(String),
    #[error("amount `{0}` exceeds the largest accepted amount (1000000000000000)")]
    AmountTooLarge(String),
    #[error("invalid date `{0}` (use YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("unknown entry type `{0}` (use income or expense)")]
    UnknownKind(String),
}

/// Raw user submission for a new entry, as captured by a form or command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub amount: String,
    pub kind: EntryKind,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl EntryDraft {
    pub fn new(amount: impl Into<String>, kind: EntryKind, category: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            kind,
            category: category.into(),
            date: String::new(),
            description: String::new(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parses the draft into an entry. An empty date falls back to `today`.
    pub fn into_entry(self, id: EntryId, today: NaiveDate) -> Result<Entry, DraftError> {
        let amount = parse_amount(&self.amount)?;
        let date = parse_optional_date(&self.date)?.unwrap_or(today);
        Ok(Entry {
            id,
            amount,
            kind: self.kind,
            category: self.category,
            date,
            description: self.description.trim().to_string(),
        })
    }
}

/// Largest single amount accepted, one quadrillion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Parses a non-negative decimal amount no larger than [`MAX_AMOUNT`].
pub fn parse_amount(input: &str) -> Result<Decimal, DraftError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingAmount);
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| DraftError::InvalidAmount(trimmed.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DraftError::NegativeAmount(trimmed.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(DraftError::AmountTooLarge(trimmed.to_string()));
    }
    Ok(amount)
}

/// Parses a `YYYY-MM-DD` date; blank input yields `None`.
pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, DraftError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DraftError::InvalidDate(trimmed.to_string()))
}
