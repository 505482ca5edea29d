//! One application session: restore, mutate, check out.

use std::cell::RefCell;
use std::rc::Rc;

use menucart_cart::{AddItem, CartChange, CartManager, CartStore, Totals};
use menucart_core::ItemId;
use menucart_menu::AddControl;
use menucart_observability::TracingReporter;
use menucart_render::{parse_qty_input, CartView, QtyInput, TotalsView};
use menucart_storage::{FileKvStore, PersistentCartStore};

use crate::prompt::UserPrompt;
use crate::sink::RenderSink;

/// Notice shown when checkout is attempted on an empty cart.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty.";

/// Confirmation asked before an explicit clear.
pub const CLEAR_CONFIRM_TEXT: &str = "Clear the cart?";

/// How a checkout attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Order acknowledged with these totals; the cart has been cleared.
    Completed(Totals),
    /// Nothing to check out; the cart was left untouched.
    EmptyCart,
}

/// Session-scoped wiring of cart manager, store, renderer and prompts.
///
/// Instantiated once per page load. The initial render happens during
/// restore, before any user event is handled.
pub struct Session {
    cart: CartManager,
    prompt: Box<dyn UserPrompt>,
    view: Rc<RefCell<CartView>>,
    totals: Rc<RefCell<TotalsView>>,
}

impl Session {
    /// Wire a session over an explicit store (tests, alternative hosts).
    pub fn start(store: Box<dyn CartStore>, prompt: Box<dyn UserPrompt>) -> Self {
        let view = Rc::new(RefCell::new(CartView::Empty));
        let totals = Rc::new(RefCell::new(TotalsView::from_totals(Totals {
            total: 0.0,
            count: 0,
        })));
        let sink = RenderSink::new(Rc::clone(&view), Rc::clone(&totals));
        let cart = CartManager::restore(store, Box::new(sink));
        Self {
            cart,
            prompt,
            view,
            totals,
        }
    }

    /// Wire a session over the default file-backed store and tracing
    /// reporter.
    pub fn open_default(prompt: Box<dyn UserPrompt>) -> anyhow::Result<Self> {
        menucart_observability::init();
        let kv = FileKvStore::open_default()?;
        let store = PersistentCartStore::new(kv, Rc::new(TracingReporter::new()));
        Ok(Self::start(Box::new(store), prompt))
    }

    pub fn cart(&self) -> &menucart_cart::Cart {
        self.cart.cart()
    }

    pub fn totals(&self) -> Totals {
        self.cart.totals()
    }

    /// Current full-cart projection, as of the last mutation.
    pub fn current_view(&self) -> CartView {
        self.view.borrow().clone()
    }

    pub fn current_totals(&self) -> TotalsView {
        self.totals.borrow().clone()
    }

    /// Click on a menu entry's "add" control.
    pub fn add_from_control(&mut self, control: &AddControl) -> CartChange {
        self.cart.add(control.resolve())
    }

    pub fn add(&mut self, item: AddItem) -> CartChange {
        self.cart.add(item)
    }

    /// `+` control on a cart row.
    pub fn increase_qty(&mut self, id: &ItemId) -> CartChange {
        self.cart.change_qty(id, 1)
    }

    /// `−` control on a cart row.
    pub fn decrease_qty(&mut self, id: &ItemId) -> CartChange {
        self.cart.change_qty(id, -1)
    }

    /// A quantity typed into a row's input. `Reset` means the host forces
    /// the display back to `1` and the cart was not touched.
    pub fn type_qty(&mut self, id: &ItemId, raw: &str) -> QtyInput {
        let parsed = parse_qty_input(raw);
        if let QtyInput::Set(qty) = parsed {
            self.cart.set_qty(id, i64::from(qty));
        }
        parsed
    }

    /// Remove control on a cart row.
    pub fn remove(&mut self, id: &ItemId) -> CartChange {
        self.cart.remove(id)
    }

    /// Checkout: acknowledge the order and clear, or block on an empty
    /// cart with a notice and no state change.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.cart().is_empty() {
            self.prompt.notify(EMPTY_CART_NOTICE);
            return CheckoutOutcome::EmptyCart;
        }

        let totals = self.cart.totals();
        let display = TotalsView::from_totals(totals);
        self.prompt.notify(&format!(
            "Thanks! You ordered {} items. Total: {}",
            display.count, display.total
        ));
        self.cart.clear();
        CheckoutOutcome::Completed(totals)
    }

    /// Explicit clear action; asks for confirmation first. Returns whether
    /// the cart was cleared.
    pub fn clear(&mut self) -> bool {
        if !self.prompt.confirm(CLEAR_CONFIRM_TEXT) {
            return false;
        }
        self.cart.clear();
        true
    }
}
