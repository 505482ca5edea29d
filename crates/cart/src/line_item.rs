use serde::{Deserialize, Serialize};

use menucart_core::ItemId;

/// Cart line: menu item, display name, unit price, quantity.
///
/// `name` and `price` are resolved at add time and frozen for the life of
/// the line item (no live re-pricing). The serialized field set
/// `{id, name, price, qty}` is the full at-rest format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    /// Unit price in display currency units (e.g. `9.5`), non-negative.
    pub price: f64,
    pub qty: u32,
}

impl LineItem {
    /// Line subtotal: `qty * price`.
    pub fn subtotal(&self) -> f64 {
        f64::from(self.qty) * self.price
    }
}

/// Request to add a menu item to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl AddItem {
    /// Add a single unit, the quantity every menu "add" control uses.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            qty: 1,
        }
    }

    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = qty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtotal_is_qty_times_price() {
        let line = LineItem {
            id: ItemId::new("p1"),
            name: "Margherita".to_string(),
            price: 9.5,
            qty: 3,
        };
        assert_eq!(line.subtotal(), 28.5);
    }

    #[test]
    fn add_item_defaults_to_one_unit() {
        let add = AddItem::new("p1", "Margherita", 9.5);
        assert_eq!(add.qty, 1);
        assert_eq!(add.with_qty(4).qty, 4);
    }
}
