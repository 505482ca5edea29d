//! `menucart-app`
//!
//! **Responsibility:** composition root for one application session.
//!
//! This crate wires the cart manager, persistence adapter, renderer sink,
//! menu browser and page controls together the way the host shell uses
//! them: one [`Session`] per page load, everything passed by reference, no
//! ambient globals.

pub mod controls;
pub mod menu_browser;
pub mod prompt;
pub mod session;
pub mod sink;

#[cfg(test)]
mod integration_tests;

pub use controls::PageControls;
pub use menu_browser::MenuBrowser;
pub use prompt::{ScriptedPrompt, UserPrompt};
pub use session::{CheckoutOutcome, Session, CLEAR_CONFIRM_TEXT, EMPTY_CART_NOTICE};
pub use sink::RenderSink;
