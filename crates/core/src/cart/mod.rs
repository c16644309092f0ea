//! The cart state machine.
//!
//! The cart is an ordered list of selected products, one entry per
//! distinct product name. All mutations go through [`Cart::apply`], a
//! pure transition function over [`CartEvent`], so cart behavior is
//! testable without any UI or storage harness. Rendering is a separate,
//! idempotent projection of state ([`CartView`]), and persistence is an
//! injected port ([`CartStorage`]) wired up by [`CartStore`].

pub mod store;
pub mod view;

pub use store::{CartStorage, CartStorageError, CartStore, CartStoreError, InMemoryStorage};
pub use view::CartView;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Price;

/// A single line in the cart.
///
/// Invariants: at most one item per distinct name; `quantity >= 1`. An
/// item whose quantity drops to zero is removed, never stored at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product name, the unique key within the cart.
    pub name: String,
    /// Unit price at the time the item was added.
    pub unit_price: Price,
    /// Units of this product in the cart. Always at least 1.
    pub quantity: u32,
    /// Reference to the product image asset.
    pub image_ref: String,
}

impl CartItem {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * self.quantity
    }
}

/// Cart mutation events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// Add one unit of a product. Merges into an existing line with the
    /// same name, otherwise appends a new line with quantity 1.
    Add {
        name: String,
        price: Price,
        image_ref: String,
    },
    /// Increase the quantity of the line at `index` by one.
    Increment { index: usize },
    /// Decrease the quantity of the line at `index` by one, removing the
    /// line entirely when it reaches zero.
    Decrement { index: usize },
    /// Remove the line at `index` unconditionally.
    Remove { index: usize },
    /// Empty the cart.
    Clear,
}

/// Errors produced by cart mutations.
///
/// These are user-input validation failures: the operation is aborted
/// and the cart is left unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The add request had no name or an unparseable/negative price.
    #[error("invalid item: {0}")]
    InvalidItem(String),
    /// The event referenced a line index that does not exist.
    #[error("no cart line at index {0}")]
    IndexOutOfRange(usize),
}

/// Ordered list of cart items, insertion order preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from a persisted snapshot.
    #[must_use]
    pub const fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price times quantity over all lines. Pure.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Apply a mutation event, returning an error and leaving the cart
    /// untouched if the event is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidItem`] for an `Add` with an empty name,
    /// and [`CartError::IndexOutOfRange`] for index events past the end.
    pub fn apply(&mut self, event: CartEvent) -> Result<(), CartError> {
        match event {
            CartEvent::Add {
                name,
                price,
                image_ref,
            } => self.add_item(&name, price, &image_ref),
            CartEvent::Increment { index } => self.increment(index),
            CartEvent::Decrement { index } => self.decrement(index),
            CartEvent::Remove { index } => self.remove(index),
            CartEvent::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidItem`] if the name is blank.
    pub fn add_item(&mut self, name: &str, price: Price, image_ref: &str) -> Result<(), CartError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CartError::InvalidItem("product name is empty".to_owned()));
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                name: name.to_owned(),
                unit_price: price,
                quantity: 1,
                image_ref: image_ref.to_owned(),
            });
        }
        Ok(())
    }

    /// Increase the quantity of the line at `index` by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if no such line exists.
    pub fn increment(&mut self, index: usize) -> Result<(), CartError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange(index))?;
        item.quantity += 1;
        Ok(())
    }

    /// Decrease the quantity of the line at `index` by one.
    ///
    /// A line reaching quantity zero is removed entirely, not clamped.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if no such line exists.
    pub fn decrement(&mut self, index: usize) -> Result<(), CartError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange(index))?;
        item.quantity -= 1;
        if item.quantity == 0 {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Remove the line at `index` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if no such line exists.
    pub fn remove(&mut self, index: usize) -> Result<(), CartError> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfRange(index));
        }
        self.items.remove(index);
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("Keyboard", price("50.00"), "img/keyboard.png")
            .unwrap();
        cart.add_item("Keyboard", price("50.00"), "img/keyboard.png")
            .unwrap();
        cart.add_item("Mouse", price("30.00"), "img/mouse.png")
            .unwrap();
        cart
    }

    #[test]
    fn duplicate_add_merges_into_one_line() {
        let cart = sample_cart();
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].name, "Keyboard");
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[1].quantity, 1);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let cart = sample_cart();
        assert_eq!(cart.total(), Decimal::from(130));
        assert_eq!(cart.items()[0].subtotal(), Decimal::from(100));
    }

    #[test]
    fn empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total(), Decimal::ZERO);
    }

    #[test]
    fn decrement_to_zero_removes_the_line() {
        let mut cart = sample_cart();
        // Mouse has quantity 1; decrementing drops the line, not clamps it.
        cart.decrement(1).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].name, "Keyboard");
        assert_eq!(cart.total(), Decimal::from(100));
    }

    #[test]
    fn decrement_above_one_keeps_the_line() {
        let mut cart = sample_cart();
        cart.decrement(0).unwrap();
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total(), Decimal::from(80));
    }

    #[test]
    fn increment_bumps_quantity() {
        let mut cart = sample_cart();
        cart.increment(1).unwrap();
        assert_eq!(cart.items()[1].quantity, 2);
        assert_eq!(cart.total(), Decimal::from(160));
    }

    #[test]
    fn remove_is_unconditional() {
        let mut cart = sample_cart();
        cart.remove(0).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].name, "Mouse");
    }

    #[test]
    fn index_events_past_the_end_leave_cart_unchanged() {
        let mut cart = sample_cart();
        let before = cart.clone();
        assert_eq!(cart.increment(5), Err(CartError::IndexOutOfRange(5)));
        assert_eq!(cart.decrement(5), Err(CartError::IndexOutOfRange(5)));
        assert_eq!(cart.remove(5), Err(CartError::IndexOutOfRange(5)));
        assert_eq!(cart, before);
    }

    #[test]
    fn blank_name_is_rejected_without_state_change() {
        let mut cart = sample_cart();
        let before = cart.clone();
        let result = cart.add_item("   ", price("10.00"), "img/x.png");
        assert!(matches!(result, Err(CartError::InvalidItem(_))));
        assert_eq!(cart, before);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = sample_cart();
        cart.apply(CartEvent::Clear).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn apply_routes_events_to_operations() {
        let mut cart = Cart::new();
        cart.apply(CartEvent::Add {
            name: "Headset".to_owned(),
            price: price("80.00"),
            image_ref: "img/headset.png".to_owned(),
        })
        .unwrap();
        cart.apply(CartEvent::Increment { index: 0 }).unwrap();
        assert_eq!(cart.items()[0].quantity, 2);
        cart.apply(CartEvent::Remove { index: 0 }).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn snapshot_round_trips_in_order() {
        let cart = sample_cart();
        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart, back);
        assert_eq!(
            back.items().iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            vec!["Keyboard", "Mouse"]
        );
    }
}
