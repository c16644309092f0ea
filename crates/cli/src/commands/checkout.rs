//! The checkout command.

use pulse_gear_core::PaymentMethod;

use crate::api::HttpStockApi;
use crate::checkout::{run_checkout, CheckoutError, ItemOutcome};
use crate::commands::{cart, products};

/// `checkout` - drain the cart into sequential purchases and report the
/// per-item outcomes.
///
/// # Errors
///
/// Returns an error if the cart snapshot cannot be read or rewritten.
pub async fn run(api_url: &str, payment: PaymentMethod) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = cart::open_store()?;
    let api = HttpStockApi::new(api_url);

    println!("Payment method: {payment}");
    println!("{}", payment.instructions());
    println!();

    let report = match run_checkout(&mut store, &api).await {
        Ok(report) => report,
        Err(CheckoutError::EmptyCart) => {
            println!("Your cart is empty.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for result in &report.results {
        let line = match &result.outcome {
            ItemOutcome::Purchased => "ok".to_owned(),
            ItemOutcome::NotFound => "product not found".to_owned(),
            ItemOutcome::InsufficientStock => "insufficient stock".to_owned(),
            ItemOutcome::Failed(reason) => format!("failed: {reason}"),
        };
        println!("  {} x{} - {line}", result.name, result.quantity);
    }

    println!();
    if report.all_purchased() {
        println!("Purchase complete. Thank you!");
    } else {
        println!("Some items could not be purchased; see the lines above.");
    }

    if let Some(stock) = &report.stock {
        println!();
        println!("Current stock:");
        products::print_stock(stock);
    }

    Ok(())
}
