//! Category/search visibility filter and the single-select category group.

use crate::entry::MenuEntry;

/// Wildcard category: matches every entry, and is what an untagged entry
/// falls back to.
pub const ALL_CATEGORY: &str = "all";

/// Whether one entry stays visible under the given category and search term.
///
/// Visible iff (`category == "all"` or the entry's category equals it) and
/// (trimmed `term` empty or the name contains it case-insensitively).
pub fn is_visible(entry: &MenuEntry, category: &str, term: &str) -> bool {
    let entry_category = entry.category.as_deref().unwrap_or(ALL_CATEGORY);
    let by_category = category == ALL_CATEGORY || entry_category == category;

    let needle = term.trim().to_lowercase();
    let by_term = needle.is_empty() || entry.name.to_lowercase().contains(&needle);

    by_category && by_term
}

/// Evaluate the whole menu, returning the entries that stay visible.
pub fn filter<'a>(entries: &'a [MenuEntry], category: &str, term: &str) -> Vec<&'a MenuEntry> {
    entries
        .iter()
        .filter(|entry| is_visible(entry, category, term))
        .collect()
}

/// Single-select category button group; selecting one deactivates the
/// previous. Defaults to [`ALL_CATEGORY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
    active: String,
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self {
            active: ALL_CATEGORY.to_string(),
        }
    }
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Activate a category button; a button without a category attribute
    /// selects the wildcard.
    pub fn select(&mut self, category: Option<&str>) {
        self.active = category.unwrap_or(ALL_CATEGORY).to_string();
    }
}
