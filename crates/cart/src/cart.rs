use serde::Serialize;

use menucart_core::ItemId;

use crate::line_item::{AddItem, LineItem};

/// Aggregate totals over the cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    /// `Σ qty_i * price_i`
    pub total: f64,
    /// `Σ qty_i`
    pub count: u64,
}

/// What a cart mutation did.
///
/// Lookup misses surface as [`CartChange::Noop`]; the persist + re-render
/// cycle still runs for them (the manager keeps call sites uniform).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    LineAdded { id: ItemId },
    QtyChanged { id: ItemId, qty: u32 },
    LineRemoved { id: ItemId },
    Cleared,
    Noop,
}

impl CartChange {
    /// Stable change name (e.g. "cart.line_added").
    pub fn change_type(&self) -> &'static str {
        match self {
            CartChange::LineAdded { .. } => "cart.line_added",
            CartChange::QtyChanged { .. } => "cart.qty_changed",
            CartChange::LineRemoved { .. } => "cart.line_removed",
            CartChange::Cleared => "cart.cleared",
            CartChange::Noop => "cart.noop",
        }
    }
}

/// Ordered collection of line items, at most one per id.
///
/// Insertion order is first-added order. Only the [`crate::CartManager`]
/// mutates a live cart; everything else reads snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from restored line items.
    ///
    /// Restored data is untrusted: duplicate ids are merged by summing
    /// quantities (same outcome as repeated adds), `qty` is clamped up to 1
    /// and negative prices to 0.
    pub fn from_lines(lines: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for mut line in lines {
            line.qty = line.qty.max(1);
            line.price = line.price.max(0.0);
            match cart.find_mut(&line.id) {
                Some(existing) => existing.qty = existing.qty.saturating_add(line.qty),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn find_mut(&mut self, id: &ItemId) -> Option<&mut LineItem> {
        self.lines.iter_mut().find(|line| &line.id == id)
    }

    /// Add a menu item: merge into the existing line for the same id, or
    /// append a new one. A requested qty of 0 still adds one unit.
    pub fn add(&mut self, item: AddItem) -> CartChange {
        let qty = item.qty.max(1);
        match self.find_mut(&item.id) {
            Some(existing) => {
                existing.qty = existing.qty.saturating_add(qty);
                CartChange::QtyChanged {
                    id: item.id,
                    qty: existing.qty,
                }
            }
            None => {
                let id = item.id.clone();
                self.lines.push(LineItem {
                    id: item.id,
                    name: item.name,
                    price: item.price.max(0.0),
                    qty,
                });
                CartChange::LineAdded { id }
            }
        }
    }

    /// Adjust a line's quantity by `delta`, clamped to stay >= 1.
    /// Unknown ids are a no-op.
    pub fn change_qty(&mut self, id: &ItemId, delta: i64) -> CartChange {
        match self.find_mut(id) {
            Some(line) => {
                let next = (i64::from(line.qty) + delta).clamp(1, i64::from(u32::MAX));
                line.qty = next as u32;
                CartChange::QtyChanged {
                    id: id.clone(),
                    qty: line.qty,
                }
            }
            None => CartChange::Noop,
        }
    }

    /// Set a line's quantity outright, clamping any externally supplied
    /// value (including non-positive) up to 1. Unknown ids are a no-op.
    pub fn set_qty(&mut self, id: &ItemId, qty: i64) -> CartChange {
        match self.find_mut(id) {
            Some(line) => {
                line.qty = qty.clamp(1, i64::from(u32::MAX)) as u32;
                CartChange::QtyChanged {
                    id: id.clone(),
                    qty: line.qty,
                }
            }
            None => CartChange::Noop,
        }
    }

    /// Drop the line matching `id` (no-op if absent).
    pub fn remove(&mut self, id: &ItemId) -> CartChange {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        if self.lines.len() < before {
            CartChange::LineRemoved { id: id.clone() }
        } else {
            CartChange::Noop
        }
    }

    /// Empty the cart in place.
    pub fn clear(&mut self) -> CartChange {
        self.lines.clear();
        CartChange::Cleared
    }

    /// Recompute totals on demand; the cart is always menu-scale small.
    pub fn totals(&self) -> Totals {
        let total = self.lines.iter().map(LineItem::subtotal).sum();
        let count = self.lines.iter().map(|line| u64::from(line.qty)).sum();
        Totals { total, count }
    }
}
