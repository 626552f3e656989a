//! FAQ visibility computation.

use super::model::FaqEntry;

/// Sentinel category matching every entry.
pub const ALL_CATEGORIES: &str = "all";

/// Visibility test for one entry.
///
/// An entry is visible iff its question text contains `search_term`
/// case-insensitively AND the category filter passes (sentinel
/// [`ALL_CATEGORIES`] or exact category match).
pub fn entry_matches(entry: &FaqEntry, search_term: &str, active_category: &str) -> bool {
    let matches_search = entry
        .question
        .to_lowercase()
        .contains(&search_term.to_lowercase());
    let matches_category = active_category == ALL_CATEGORIES || entry.category == active_category;
    matches_search && matches_category
}

/// The current filter state: free-text term plus exactly one active
/// category.
///
/// Applying the filter is a pure synchronous pass over the static entry
/// set; it runs on every keystroke and every category activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqFilter {
    pub search_term: String,
    pub active_category: String,
}

impl Default for FaqFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FaqFilter {
    /// Computes the visibility assignment for `entries`.
    pub fn apply(&self, entries: &[FaqEntry]) -> Vec<bool> {
        entries
            .iter()
            .map(|entry| entry_matches(entry, &self.search_term, &self.active_category))
            .collect()
    }
}
