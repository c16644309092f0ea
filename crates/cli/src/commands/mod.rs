//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod migrate;
pub mod products;
pub mod seed;
