//! Purchase route handler.
//!
//! One purchase request decrements stock for a single cart line. The
//! client drains its cart by posting these sequentially; each request is
//! independent, so a failed line does not roll back earlier ones.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::db::{ProductRepository, StockDecrement};
use crate::error::{ApiMessage, AppError, Result};
use crate::state::AppState;

/// Purchase request body.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    /// Product name to purchase.
    pub name: String,
    /// Units to take out of stock. Must be at least 1.
    pub quantity: i32,
}

/// Process a purchase for one product.
///
/// POST /api/purchase
///
/// Responses:
/// - `200 {"message":"Ok"}` on success
/// - `404 {"message":"Product not found"}` for an unknown name
/// - `400 {"message":"Insufficient stock for <name>"}` when stock is short
/// - `500 {"message":"Server error"}` on database failure
#[instrument(skip(state), fields(product = %request.name, quantity = request.quantity))]
pub async fn purchase(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<ApiMessage>> {
    if request.quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }

    let repository = ProductRepository::new(state.pool());
    match repository
        .decrement_stock(&request.name, request.quantity)
        .await?
    {
        StockDecrement::Applied => {
            tracing::info!("Stock decremented");
            Ok(Json(ApiMessage::ok()))
        }
        StockDecrement::NotFound => Err(AppError::ProductNotFound),
        StockDecrement::Insufficient => Err(AppError::InsufficientStock {
            name: request.name,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_deserializes() {
        let request: PurchaseRequest =
            serde_json::from_str(r#"{"name":"Keyboard","quantity":2}"#).unwrap();
        assert_eq!(request.name, "Keyboard");
        assert_eq!(request.quantity, 2);
    }

    #[test]
    fn request_body_rejects_missing_fields() {
        assert!(serde_json::from_str::<PurchaseRequest>(r#"{"name":"Keyboard"}"#).is_err());
        assert!(serde_json::from_str::<PurchaseRequest>(r#"{"quantity":1}"#).is_err());
    }
}
