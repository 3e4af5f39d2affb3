use std::fmt;

use thiserror::Error;

use super::category::CategorySet;

/// Sentinel label selecting every category.
pub const ALL_SENTINEL: &str = "All";

/// Narrowing applied to the displayed entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct UnknownFilter(pub String);

impl Filter {
    /// Resolves user input against the known categories. `All` always wins over a
    /// category of the same name.
    pub fn parse(input: &str, categories: &CategorySet) -> Result<Self, UnknownFilter> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(Filter::All);
        }
        if categories.contains(trimmed) {
            Ok(Filter::Category(trimmed.to_string()))
        } else {
            Err(UnknownFilter(trimmed.to_string()))
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => name == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => ALL_SENTINEL,
            Filter::Category(name) => name,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
