//! FAQ list view-model.

use campus_core::faq::{ALL_CATEGORIES, FaqEntry, FaqFilter};

/// View-model for the FAQ list.
///
/// Owns the static entries, the filter state, and the per-entry
/// expanded/collapsed flags for the collapsible panels. Exactly one
/// category is active at a time; the default is [`ALL_CATEGORIES`].
pub struct FaqList {
    entries: Vec<FaqEntry>,
    filter: FaqFilter,
    expanded: Vec<bool>,
}

impl FaqList {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let expanded = vec![false; entries.len()];
        Self {
            entries,
            filter: FaqFilter::default(),
            expanded,
        }
    }

    /// Updates the search term (run on every keystroke).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    /// Activates a category button, deactivating the previous one.
    pub fn activate_category(&mut self, category: impl Into<String>) {
        self.filter.active_category = category.into();
    }

    pub fn active_category(&self) -> &str {
        &self.filter.active_category
    }

    /// The category buttons to render: the sentinel first, then each
    /// distinct entry category in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for entry in &self.entries {
            if !categories.contains(&entry.category.as_str()) {
                categories.push(&entry.category);
            }
        }
        categories
    }

    /// The visible entries under the current filter, paired with their
    /// stable index into the full list.
    pub fn visible_entries(&self) -> Vec<(usize, &FaqEntry)> {
        let visibility = self.filter.apply(&self.entries);
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, _)| visibility[*i])
            .collect()
    }

    /// Toggles one collapsible panel. Returns the new expanded state, or
    /// false for an out-of-range index (no-op).
    pub fn toggle_expanded(&mut self, index: usize) -> bool {
        match self.expanded.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                *flag
            }
            None => false,
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }
}
