//! `menucart-render`
//!
//! **Responsibility:** project cart state into a view.
//!
//! Rendering is a pure function of the cart snapshot and is re-run in full
//! on every mutation — no incremental diffing at menu scale. Free-text
//! fields are HTML-escaped before they reach markup; that is a security
//! property, not cosmetics.

pub mod escape;
pub mod format;
pub mod input;
pub mod view;

pub use escape::escape_html;
pub use format::format_money;
pub use input::{parse_qty_input, QtyInput};
pub use view::{render, CartRow, CartView, TotalsView};
