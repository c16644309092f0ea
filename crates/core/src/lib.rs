//! PulseGear Core - Shared types and cart logic.
//!
//! This crate provides the types used across all PulseGear components:
//! - `storefront` - Stock service HTTP API
//! - `cli` - Shopping client and operational tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. The cart state machine lives here so it can be
//! tested without any UI or network harness; persistence is an injected
//! port implemented by the consuming binary.
//!
//! # Modules
//!
//! - [`types`] - Prices, payment methods, and wire types
//! - [`cart`] - The cart state machine, its persistence port, and the
//!   display projection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartError, CartEvent, CartItem, CartStore, CartView};
pub use types::*;
