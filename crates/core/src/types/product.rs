//! Product wire type shared between the stock service and its clients.

use serde::{Deserialize, Serialize};

/// A product as reported by `GET /api/products`.
///
/// The server-side stock count is authoritative; a client only ever holds
/// the snapshot from its last fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product name.
    pub name: String,
    /// Units currently in stock. Never negative.
    pub stock: i32,
}

impl Product {
    /// Whether at least one unit can still be purchased.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.stock > 0
    }
}
