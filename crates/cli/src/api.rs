//! HTTP client for the stock service API.
//!
//! The checkout engine talks to the service through the [`StockApi`]
//! trait so it can be exercised against a fake in tests; [`HttpStockApi`]
//! is the real reqwest-backed implementation.

use reqwest::StatusCode;
use serde::Serialize;

use pulse_gear_core::Product;

/// Default base URL of a locally running storefront.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Transport-level API failures (the request never got a usable answer).
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Connection, timeout, or protocol failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a status the API does not define.
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Server verdict on a single purchase request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Stock was decremented.
    Ok,
    /// No product with the requested name exists.
    NotFound,
    /// The product holds fewer units than requested.
    InsufficientStock,
}

/// Client-side view of the stock service.
pub trait StockApi {
    /// Purchase `quantity` units of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no usable response arrived. A well-formed
    /// rejection (404/400) is a [`PurchaseOutcome`], not an error.
    async fn purchase(&self, name: &str, quantity: u32) -> Result<PurchaseOutcome, ApiError>;

    /// Fetch the authoritative stock snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
}

#[derive(Serialize)]
struct PurchaseBody<'a> {
    name: &'a str,
    quantity: u32,
}

/// reqwest-backed [`StockApi`] implementation.
pub struct HttpStockApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStockApi {
    /// Create a client for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl StockApi for HttpStockApi {
    async fn purchase(&self, name: &str, quantity: u32) -> Result<PurchaseOutcome, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/purchase", self.base_url))
            .json(&PurchaseBody { name, quantity })
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(PurchaseOutcome::Ok),
            StatusCode::NOT_FOUND => Ok(PurchaseOutcome::NotFound),
            StatusCode::BAD_REQUEST => Ok(PurchaseOutcome::InsufficientStock),
            status => Err(ApiError::UnexpectedStatus(status)),
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/products", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
