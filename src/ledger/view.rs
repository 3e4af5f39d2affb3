use crate::domain::{CategorySet, Filter, UnknownFilter};

/// Ephemeral per-session view settings. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    filter: Filter,
    pending_category: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Selects a filter by label; the previous selection is kept when the label is unknown.
    pub fn select_filter(
        &mut self,
        input: &str,
        categories: &CategorySet,
    ) -> Result<&Filter, UnknownFilter> {
        self.filter = Filter::parse(input, categories)?;
        Ok(&self.filter)
    }

    pub fn reset_filter(&mut self) {
        self.filter = Filter::All;
    }

    /// Text typed for a category that has not been submitted yet.
    pub fn pending_category(&self) -> Option<&str> {
        self.pending_category.as_deref()
    }

    pub fn set_pending_category(&mut self, text: impl Into<String>) {
        self.pending_category = Some(text.into());
    }

    /// Hands the pending text over for submission and clears it.
    pub fn take_pending_category(&mut self) -> Option<String> {
        self.pending_category.take()
    }
}
