//! Display projection of the cart.
//!
//! A pure, idempotent function of cart state. Whatever renders the cart
//! (terminal, template, fragment) takes one of these and prints it; no
//! rendering code reaches into the cart itself.

use super::{Cart, CartItem};

/// Placeholder shown when the cart has no items.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    /// Product name.
    pub name: String,
    /// Unit price, formatted to two decimal places.
    pub unit_price: String,
    /// Live quantity.
    pub quantity: u32,
    /// Line subtotal, formatted to two decimal places.
    pub subtotal: String,
    /// Image asset reference.
    pub image_ref: String,
}

/// Rendered cart: one row per item plus the formatted total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Rows in cart order. Empty when the cart is empty.
    pub rows: Vec<CartRowView>,
    /// Grand total, formatted to exactly two decimal places.
    pub total: String,
    /// Placeholder message, present only for an empty cart.
    pub placeholder: Option<&'static str>,
}

impl CartView {
    /// Project a cart into its display form.
    #[must_use]
    pub fn project(cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self {
                rows: Vec::new(),
                total: "0.00".to_owned(),
                placeholder: Some(EMPTY_CART_MESSAGE),
            };
        }

        Self {
            rows: cart.items().iter().map(CartRowView::from).collect(),
            total: format!("{:.2}", cart.total()),
            placeholder: None,
        }
    }
}

impl From<&CartItem> for CartRowView {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name.clone(),
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity,
            subtotal: format!("{:.2}", item.subtotal()),
            image_ref: item.image_ref.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn empty_cart_projects_placeholder_and_zero_total() {
        let view = CartView::project(&Cart::new());
        assert!(view.rows.is_empty());
        assert_eq!(view.total, "0.00");
        assert_eq!(view.placeholder, Some(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn rows_carry_formatted_prices_and_subtotals() {
        let mut cart = Cart::new();
        cart.add_item("Keyboard", price("50.00"), "img/keyboard.png")
            .unwrap();
        cart.increment(0).unwrap();
        cart.add_item("Mouse", price("30.00"), "img/mouse.png")
            .unwrap();

        let view = CartView::project(&cart);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].name, "Keyboard");
        assert_eq!(view.rows[0].unit_price, "50.00");
        assert_eq!(view.rows[0].quantity, 2);
        assert_eq!(view.rows[0].subtotal, "100.00");
        assert_eq!(view.total, "130.00");
        assert_eq!(view.placeholder, None);
    }

    #[test]
    fn projection_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item("Headset", price("79.90"), "img/headset.png")
            .unwrap();
        assert_eq!(CartView::project(&cart), CartView::project(&cart));
    }
}
