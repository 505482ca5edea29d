use serde::{Deserialize, Serialize};

use menucart_core::ItemId;

/// One entry on the menu page.
///
/// `category` mirrors the entry's tag attribute; a missing tag behaves as
/// the wildcard `all` tag when filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: ItemId,
    pub name: String,
    pub category: Option<String>,
}

impl MenuEntry {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
