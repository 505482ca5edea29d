//! Cart view model and markup projection.

use serde::Serialize;

use menucart_cart::{LineItem, Totals};
use menucart_core::ItemId;

use crate::escape::escape_html;
use crate::format::format_money;

/// One rendered cart row.
///
/// `name_html` is already escaped; everything else is derived display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartRow {
    pub id: ItemId,
    pub name_html: String,
    /// `$`-prefixed two-decimal unit price, e.g. `"$9.50"`.
    pub unit_price: String,
    pub qty: u32,
    /// `$`-prefixed two-decimal line subtotal.
    pub subtotal: String,
}

/// Aggregate totals ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsView {
    /// `$`-prefixed formatted total, e.g. `"$19.00"`.
    pub total: String,
    /// Raw item count for the badge.
    pub count: u64,
}

impl TotalsView {
    pub fn from_totals(totals: Totals) -> Self {
        Self {
            total: format!("${}", format_money(totals.total)),
            count: totals.count,
        }
    }
}

/// Full projection of the cart list: a single empty placeholder, or one row
/// per line item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CartView {
    Empty,
    Rows(Vec<CartRow>),
}

/// Placeholder shown when the cart has no lines.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty";

/// Project line items into the view model.
pub fn render(lines: &[LineItem]) -> CartView {
    if lines.is_empty() {
        return CartView::Empty;
    }
    let rows = lines
        .iter()
        .map(|line| CartRow {
            id: line.id.clone(),
            name_html: escape_html(&line.name),
            unit_price: format!("${}", format_money(line.price)),
            qty: line.qty,
            subtotal: format!("${}", format_money(line.subtotal())),
        })
        .collect();
    CartView::Rows(rows)
}

impl CartView {
    /// Markup fragment replacing the whole cart list.
    pub fn to_html(&self) -> String {
        match self {
            CartView::Empty => format!(r#"<div class="empty">{EMPTY_CART_TEXT}</div>"#),
            CartView::Rows(rows) => {
                let mut html = String::new();
                for row in rows {
                    html.push_str(&format!(
                        r#"<div class="cart-row" data-id="{id}">
    <div class="cart-name">{name}</div>
    <div class="cart-price">{price}</div>
    <div class="cart-qty">
        <button class="qty-decrease" aria-label="Decrease">−</button>
        <input class="qty-input" type="number" min="1" value="{qty}">
        <button class="qty-increase" aria-label="Increase">+</button>
    </div>
    <div class="cart-sub">{sub}</div>
    <button class="remove-item" aria-label="Remove">✕</button>
</div>
"#,
                        id = escape_html(row.id.as_str()),
                        name = row.name_html,
                        price = row.unit_price,
                        qty = row.qty,
                        sub = row.subtotal,
                    ));
                }
                html
            }
        }
    }
}
