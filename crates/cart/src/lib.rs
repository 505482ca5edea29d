//! `menucart-cart`
//!
//! **Responsibility:** the cart domain — line items, the ordered cart
//! collection and its invariants, and the session-scoped [`CartManager`]
//! that drives persist + re-render on every mutation.
//!
//! Invariants owned here:
//! - at most one line item per [`menucart_core::ItemId`]
//! - `qty >= 1` after every mutation path (clamped, never rejected)
//! - insertion order is preserved

pub mod cart;
pub mod line_item;
pub mod manager;
pub mod ports;

pub use cart::{Cart, CartChange, Totals};
pub use line_item::{AddItem, LineItem};
pub use manager::CartManager;
pub use ports::{CartSink, CartStore};
