use crate::domain::{Entry, Filter};

/// Keeps the entries visible under `filter`, preserving their order.
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &Filter) -> Vec<&'a Entry> {
    match filter {
        Filter::All => entries.iter().collect(),
        Filter::Category(_) => entries
            .iter()
            .filter(|entry| filter.matches(&entry.category))
            .collect(),
    }
}
