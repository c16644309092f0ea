//! The checkout sequence.
//!
//! Drains the cart item by item into sequential purchase requests: one
//! request in flight at a time, in cart order. Checkout is a batch of
//! independent sub-operations with per-item result reporting; a rejected
//! or failed item does not abort the remaining ones and nothing is rolled
//! back. After the loop the client refetches the authoritative stock
//! snapshot and clears the cart.

use pulse_gear_core::cart::{CartStore, CartStoreError};
use pulse_gear_core::Product;

use crate::api::{PurchaseOutcome, StockApi};

/// Outcome of one cart line's purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The server decremented stock for this line.
    Purchased,
    /// The server does not know this product.
    NotFound,
    /// The server had fewer units than requested.
    InsufficientStock,
    /// The request itself failed (network, server error).
    Failed(String),
}

/// Per-item result of a checkout run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub name: String,
    pub quantity: u32,
    pub outcome: ItemOutcome,
}

/// Result of draining the whole cart.
#[derive(Debug, Clone, Default)]
pub struct CheckoutReport {
    /// One entry per cart line, in cart order.
    pub results: Vec<ItemResult>,
    /// Stock snapshot refetched after the loop, if the fetch succeeded.
    pub stock: Option<Vec<Product>>,
}

impl CheckoutReport {
    /// Whether every line was purchased.
    #[must_use]
    pub fn all_purchased(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.outcome == ItemOutcome::Purchased)
    }
}

/// Errors that abort a checkout before or after the purchase loop.
#[derive(thiserror::Error, Debug)]
pub enum CheckoutError {
    /// Checkout on an empty cart is rejected with no network activity.
    #[error("the cart is empty")]
    EmptyCart,
    /// The cleared cart snapshot could not be persisted.
    #[error(transparent)]
    Store(#[from] CartStoreError),
}

/// Run the checkout sequence against `api`, clearing `store` afterwards.
///
/// The loop is strictly sequential and best-effort: every line is
/// attempted regardless of earlier outcomes, and partial success is
/// reported per item rather than rolled back. The cart is cleared even
/// when some lines failed; the report tells the user exactly what went
/// through.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart (zero requests
/// issued) and [`CheckoutError::Store`] if clearing the cart cannot be
/// persisted.
pub async fn run_checkout<A: StockApi>(
    store: &mut CartStore,
    api: &A,
) -> Result<CheckoutReport, CheckoutError> {
    if store.cart().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut results = Vec::with_capacity(store.cart().items().len());
    for item in store.cart().items().to_vec() {
        let outcome = match api.purchase(&item.name, item.quantity).await {
            Ok(PurchaseOutcome::Ok) => ItemOutcome::Purchased,
            Ok(PurchaseOutcome::NotFound) => {
                tracing::warn!(product = %item.name, "Product not found");
                ItemOutcome::NotFound
            }
            Ok(PurchaseOutcome::InsufficientStock) => {
                tracing::warn!(product = %item.name, "Insufficient stock");
                ItemOutcome::InsufficientStock
            }
            Err(e) => {
                tracing::error!(product = %item.name, error = %e, "Purchase request failed");
                ItemOutcome::Failed(e.to_string())
            }
        };
        results.push(ItemResult {
            name: item.name,
            quantity: item.quantity,
            outcome,
        });
    }

    // Refetch authoritative stock; the displayed numbers are a cache, so
    // a failed refresh is logged but does not fail the checkout.
    let stock = match api.list_products().await {
        Ok(products) => Some(products),
        Err(e) => {
            tracing::error!(error = %e, "Stock refresh failed");
            None
        }
    };

    store.clear()?;

    Ok(CheckoutReport { results, stock })
}
