//! Resolution of an "add" control into a cart add request.

use menucart_cart::AddItem;
use menucart_core::ItemId;

/// Display name used when neither the control nor its entry names the item.
pub const PLACEHOLDER_NAME: &str = "Pizza";

/// Attributes carried by a menu entry's "add" control.
///
/// `name` and `price` come off the control itself; `heading` is the
/// enclosing entry's heading text, used as the name fallback. Empty
/// attribute values behave as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddControl {
    pub id: ItemId,
    pub name: Option<String>,
    pub price: Option<String>,
    pub heading: Option<String>,
}

impl AddControl {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            price: None,
            heading: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Resolve the single-unit add request: name falls back control →
    /// heading → placeholder; a missing or malformed price is `0`.
    pub fn resolve(&self) -> AddItem {
        let name = non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.heading.as_deref()))
            .unwrap_or(PLACEHOLDER_NAME)
            .to_string();

        let price = self
            .price
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0);

        AddItem::new(self.id.clone(), name, price)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_attributes_resolve_directly() {
        let add = AddControl::new("p1")
            .with_name("Margherita")
            .with_price("9.5")
            .resolve();

        assert_eq!(add.id, ItemId::new("p1"));
        assert_eq!(add.name, "Margherita");
        assert_eq!(add.price, 9.5);
        assert_eq!(add.qty, 1);
    }

    #[test]
    fn missing_name_falls_back_to_heading() {
        let add = AddControl::new("p1")
            .with_heading("Quattro Formaggi")
            .with_price("12")
            .resolve();

        assert_eq!(add.name, "Quattro Formaggi");
    }

    #[test]
    fn empty_name_behaves_as_absent() {
        let add = AddControl::new("p1")
            .with_name("")
            .with_heading("Quattro Formaggi")
            .resolve();

        assert_eq!(add.name, "Quattro Formaggi");
    }

    #[test]
    fn nameless_control_uses_placeholder() {
        let add = AddControl::new("p1").resolve();
        assert_eq!(add.name, PLACEHOLDER_NAME);
    }

    #[test]
    fn malformed_or_missing_price_defaults_to_zero() {
        assert_eq!(AddControl::new("p1").with_price("$9.50").resolve().price, 0.0);
        assert_eq!(AddControl::new("p1").resolve().price, 0.0);
    }
}
