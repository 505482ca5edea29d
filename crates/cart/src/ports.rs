//! Ports the cart manager drives after every mutation.
//!
//! The storage and rendering crates implement these; the domain stays free
//! of serialization and markup concerns.

use crate::cart::Cart;
use crate::line_item::LineItem;

/// Persistent slot for the cart.
///
/// Both operations are infallible at this boundary: a store that cannot
/// read returns an empty sequence, a store that cannot write reports the
/// failure through its own channel and returns normally. The in-memory cart
/// stays the source of truth for the session either way.
pub trait CartStore {
    fn load(&self) -> Vec<LineItem>;
    fn save(&self, lines: &[LineItem]);
}

/// Receiver of full cart snapshots after each mutation.
///
/// Re-rendering is a full replace, so the sink gets the whole cart every
/// time rather than a diff.
pub trait CartSink {
    fn cart_changed(&mut self, cart: &Cart);
}

/// Sink that ignores snapshots, for callers that only need persistence.
#[derive(Debug, Default)]
pub struct NullSink;

impl CartSink for NullSink {
    fn cart_changed(&mut self, _cart: &Cart) {}
}
