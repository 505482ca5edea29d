//! `menucart-menu`
//!
//! **Responsibility:** the menu side of the page — entries, the
//! category/search visibility filter, and resolution of "add" controls into
//! cart add requests.
//!
//! Filtering is a stateless linear scan re-run in full per keystroke; the
//! menu is small and nothing here caches.

pub mod entry;
pub mod filter;
pub mod source;

pub use entry::MenuEntry;
pub use filter::{filter, is_visible, CategorySelector, ALL_CATEGORY};
pub use source::{AddControl, PLACEHOLDER_NAME};
