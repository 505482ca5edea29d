use menucart_core::ItemId;

use crate::cart::{Cart, CartChange, Totals};
use crate::line_item::AddItem;
use crate::ports::{CartSink, CartStore};

/// Session-scoped owner of the live cart.
///
/// Instantiated once per application session and handed by reference to
/// whatever drives it — no ambient globals. Every mutation entry point runs
/// the same tail: persist the snapshot, then push it to the sink. That
/// includes lookup misses (`change_qty`/`set_qty`/`remove` on an unknown
/// id), which keeps call sites uniform at the cost of one redundant
/// save/render of an unchanged cart.
pub struct CartManager {
    cart: Cart,
    store: Box<dyn CartStore>,
    sink: Box<dyn CartSink>,
}

impl CartManager {
    /// Restore the persisted cart and push the initial snapshot to the sink.
    pub fn restore(store: Box<dyn CartStore>, sink: Box<dyn CartSink>) -> Self {
        let cart = Cart::from_lines(store.load());
        let mut manager = Self { cart, store, sink };
        manager.sink.cart_changed(&manager.cart);
        manager
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> Totals {
        self.cart.totals()
    }

    pub fn add(&mut self, item: AddItem) -> CartChange {
        let change = self.cart.add(item);
        self.commit(change)
    }

    pub fn change_qty(&mut self, id: &ItemId, delta: i64) -> CartChange {
        let change = self.cart.change_qty(id, delta);
        self.commit(change)
    }

    pub fn set_qty(&mut self, id: &ItemId, qty: i64) -> CartChange {
        let change = self.cart.set_qty(id, qty);
        self.commit(change)
    }

    pub fn remove(&mut self, id: &ItemId) -> CartChange {
        let change = self.cart.remove(id);
        self.commit(change)
    }

    pub fn clear(&mut self) -> CartChange {
        let change = self.cart.clear();
        self.commit(change)
    }

    fn commit(&mut self, change: CartChange) -> CartChange {
        tracing::debug!(change = change.change_type(), lines = self.cart.len(), "cart mutation");
        self.store.save(self.cart.lines());
        self.sink.cart_changed(&self.cart);
        change
    }
}
