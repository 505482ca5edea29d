//! Menu browsing state: active category + current search term.

use menucart_menu::{filter, CategorySelector, MenuEntry};

/// Holds the menu entries with the active category and search term, and
/// re-evaluates visibility in full whenever either changes.
#[derive(Debug, Clone)]
pub struct MenuBrowser {
    entries: Vec<MenuEntry>,
    selector: CategorySelector,
    term: String,
}

impl MenuBrowser {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries,
            selector: CategorySelector::new(),
            term: String::new(),
        }
    }

    pub fn active_category(&self) -> &str {
        self.selector.active()
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// Category button click; `None` is the wildcard button.
    pub fn select_category(&mut self, category: Option<&str>) {
        self.selector.select(category);
    }

    /// Search keystroke: replace the term wholesale.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Entries visible under the current category + term.
    pub fn visible(&self) -> Vec<&MenuEntry> {
        filter(&self.entries, self.selector.active(), &self.term)
    }
}
