//! Cart persistence port.
//!
//! The cart survives between sessions as a single serialized snapshot
//! under a fixed key, fully overwritten on every mutation. The storage
//! backend is injected: the cli uses a JSON file, tests use
//! [`InMemoryStorage`].

use std::cell::RefCell;

use crate::types::Price;

use super::{Cart, CartError, CartEvent, CartItem, CartView};

/// Errors surfaced by a cart storage backend.
#[derive(thiserror::Error, Debug)]
pub enum CartStorageError {
    /// The backing store could not be read or written.
    #[error("cart storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted snapshot is not a valid cart.
    #[error("cart snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Storage backend for the cart snapshot.
pub trait CartStorage {
    /// Load the persisted snapshot, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError`] if the store is unreadable or corrupt.
    fn load(&self) -> Result<Option<Vec<CartItem>>, CartStorageError>;

    /// Overwrite the snapshot with the current items.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError`] if the store cannot be written.
    fn save(&self, items: &[CartItem]) -> Result<(), CartStorageError>;
}

/// Cart state plus its persistence port.
///
/// Owns the in-memory cart for the session and writes the snapshot back
/// after every mutating operation, mirroring the load-once,
/// persist-on-mutate lifecycle of the storefront cart.
pub struct CartStore {
    cart: Cart,
    storage: Box<dyn CartStorage>,
}

/// Errors from mutating operations on a [`CartStore`].
#[derive(thiserror::Error, Debug)]
pub enum CartStoreError {
    /// The mutation itself was invalid; nothing was persisted.
    #[error(transparent)]
    Cart(#[from] CartError),
    /// The mutation applied but the snapshot could not be written.
    #[error(transparent)]
    Storage(#[from] CartStorageError),
}

impl CartStore {
    /// Load the cart from storage, starting empty if no snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns [`CartStorageError`] if the snapshot is unreadable.
    pub fn load(storage: Box<dyn CartStorage>) -> Result<Self, CartStorageError> {
        let cart = storage
            .load()?
            .map_or_else(Cart::new, Cart::from_items);
        Ok(Self { cart, storage })
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Project the current state for display.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::project(&self.cart)
    }

    /// Apply a mutation event and persist the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Cart`] if the event is invalid (state
    /// unchanged, nothing persisted) or [`CartStoreError::Storage`] if
    /// the write fails.
    pub fn apply(&mut self, event: CartEvent) -> Result<(), CartStoreError> {
        self.cart.apply(event)?;
        self.storage.save(self.cart.items())?;
        Ok(())
    }

    /// Add one unit of a product and persist.
    ///
    /// # Errors
    ///
    /// See [`CartStore::apply`].
    pub fn add_item(
        &mut self,
        name: &str,
        price: Price,
        image_ref: &str,
    ) -> Result<(), CartStoreError> {
        self.apply(CartEvent::Add {
            name: name.to_owned(),
            price,
            image_ref: image_ref.to_owned(),
        })
    }

    /// Empty the cart and persist. Used after a confirmed checkout and on
    /// an explicit "empty cart" request.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Storage`] if the write fails.
    pub fn clear(&mut self) -> Result<(), CartStoreError> {
        self.apply(CartEvent::Clear)
    }
}

/// In-memory storage backend, used in tests and as a null store.
#[derive(Default)]
pub struct InMemoryStorage {
    snapshot: RefCell<Option<String>>,
}

impl InMemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartItem>>, CartStorageError> {
        self.snapshot
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(CartStorageError::from)
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CartStorageError> {
        let json = serde_json::to_string(items)?;
        *self.snapshot.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::rc::Rc;

    /// Shares one in-memory snapshot across "sessions".
    struct SharedStorage(Rc<InMemoryStorage>);

    impl CartStorage for SharedStorage {
        fn load(&self) -> Result<Option<Vec<CartItem>>, CartStorageError> {
            self.0.load()
        }
        fn save(&self, items: &[CartItem]) -> Result<(), CartStorageError> {
            self.0.save(items)
        }
    }

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn starts_empty_without_a_snapshot() {
        let store = CartStore::load(Box::new(InMemoryStorage::new())).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn persists_after_every_mutation_and_reloads() {
        let backing = Rc::new(InMemoryStorage::new());

        let mut store = CartStore::load(Box::new(SharedStorage(Rc::clone(&backing)))).unwrap();
        store
            .add_item("Keyboard", price("50.00"), "img/keyboard.png")
            .unwrap();
        store
            .add_item("Keyboard", price("50.00"), "img/keyboard.png")
            .unwrap();
        store
            .add_item("Mouse", price("30.00"), "img/mouse.png")
            .unwrap();

        // A fresh "page load" sees the identical ordered sequence.
        let reloaded = CartStore::load(Box::new(SharedStorage(backing))).unwrap();
        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.cart().items()[0].quantity, 2);
        assert_eq!(reloaded.cart().total(), Decimal::from(130));
    }

    #[test]
    fn invalid_mutation_persists_nothing() {
        let backing = Rc::new(InMemoryStorage::new());
        let mut store = CartStore::load(Box::new(SharedStorage(Rc::clone(&backing)))).unwrap();

        assert!(store.add_item("", price("10.00"), "img/x.png").is_err());
        assert!(backing.load().unwrap().is_none());
    }

    #[test]
    fn clear_overwrites_the_snapshot_with_an_empty_cart() {
        let backing = Rc::new(InMemoryStorage::new());
        let mut store = CartStore::load(Box::new(SharedStorage(Rc::clone(&backing)))).unwrap();

        store
            .add_item("Headset", price("80.00"), "img/headset.png")
            .unwrap();
        store.clear().unwrap();

        assert_eq!(backing.load().unwrap(), Some(Vec::new()));
    }
}
