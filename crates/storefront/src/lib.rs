//! PulseGear Storefront library.
//!
//! This crate provides the stock service functionality as a library,
//! allowing it to be tested and reused (the cli uses the db layer for
//! seeding).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
