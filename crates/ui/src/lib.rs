//! `menucart-ui`
//!
//! **Responsibility:** open/closed state for the page's toggled surfaces.
//!
//! Each controller holds an explicit [`PanelState`] and exposes transition
//! methods driven by click/scroll input — the state lives here, never in
//! incidental presentation classes. None of these share state with the cart.

pub mod panels;
pub mod scroll;
pub mod toggle;

pub use panels::{CartPanel, HeaderControls, LocationModal, ModalClick};
pub use scroll::{BackToTop, ScrollToTop, BACK_TO_TOP_THRESHOLD};
pub use toggle::PanelState;
