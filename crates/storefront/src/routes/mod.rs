//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # API
//! POST /api/purchase           - Decrement stock for one cart line
//! GET  /api/products           - List all products with current stock
//! POST /api/contact            - Contact form submission
//!
//! # Static pages
//! /*                           - Static assets (markup, styles, scripts)
//! ```

pub mod contact;
pub mod products;
pub mod purchase;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/purchase", post(purchase::purchase))
        .route("/products", get(products::list))
        .route("/contact", post(contact::submit))
}
