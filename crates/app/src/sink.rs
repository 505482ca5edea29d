//! Render sink: projects every cart snapshot into shared view cells.

use std::cell::RefCell;
use std::rc::Rc;

use menucart_cart::{Cart, CartSink};
use menucart_render::{render, CartView, TotalsView};

/// [`CartSink`] that re-renders the full cart view and totals on every
/// snapshot. The session keeps clones of the cells to read the current
/// view back out.
pub struct RenderSink {
    view: Rc<RefCell<CartView>>,
    totals: Rc<RefCell<TotalsView>>,
}

impl RenderSink {
    pub fn new(view: Rc<RefCell<CartView>>, totals: Rc<RefCell<TotalsView>>) -> Self {
        Self { view, totals }
    }
}

impl CartSink for RenderSink {
    fn cart_changed(&mut self, cart: &Cart) {
        *self.view.borrow_mut() = render(cart.lines());
        *self.totals.borrow_mut() = TotalsView::from_totals(cart.totals());
    }
}
