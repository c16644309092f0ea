//! Core types for PulseGear.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod payment;
pub mod price;
pub mod product;

pub use payment::PaymentMethod;
pub use price::{Price, PriceError};
pub use product::Product;
