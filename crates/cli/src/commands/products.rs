//! The products command: show the authoritative stock snapshot.

use pulse_gear_core::Product;

use crate::api::{HttpStockApi, StockApi};

/// `products` - fetch and print current stock levels.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn run(api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api = HttpStockApi::new(api_url);
    let products = api.list_products().await?;
    print_stock(&products);
    Ok(())
}

/// Print one line per product, marking exhausted ones.
pub fn print_stock(products: &[Product]) {
    if products.is_empty() {
        println!("No products in the catalog.");
        return;
    }
    for product in products {
        if product.available() {
            println!("  {} - {} in stock", product.name, product.stock);
        } else {
            println!("  {} - out of stock", product.name);
        }
    }
}
