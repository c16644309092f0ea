//! Product listing route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use pulse_gear_core::Product;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::state::AppState;

/// List all products with their current stock.
///
/// GET /api/products
///
/// The returned numbers are a snapshot: the client renders them as a
/// cache, never as a reservation.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}
