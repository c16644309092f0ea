//! Cart commands: mutate the persisted snapshot and print the result.

use pulse_gear_core::cart::{CartEvent, CartStore, CartView};
use pulse_gear_core::Price;

use crate::storage::FileStorage;

/// Load the cart store from the default snapshot path.
///
/// # Errors
///
/// Returns an error if the snapshot exists but cannot be read.
pub fn open_store() -> Result<CartStore, Box<dyn std::error::Error>> {
    let storage = FileStorage::new(FileStorage::default_path());
    Ok(CartStore::load(Box::new(storage))?)
}

/// Print a cart view the way the cart page renders it: one row per item
/// with quantity and subtotal, then the total to two decimal places.
pub fn print_view(view: &CartView) {
    if let Some(placeholder) = view.placeholder {
        println!("{placeholder}");
    } else {
        for (index, row) in view.rows.iter().enumerate() {
            println!(
                "[{index}] {} - {} x{} = {}",
                row.name, row.unit_price, row.quantity, row.subtotal
            );
        }
    }
    println!("Total: {}", view.total);
}

/// `cart add` - add one unit of a product.
///
/// # Errors
///
/// Returns an error for a blank name or an invalid/negative price;
/// nothing is persisted in that case.
pub fn add(name: &str, price: &str, image: &str) -> Result<(), Box<dyn std::error::Error>> {
    let price: Price = price.parse()?;
    let mut store = open_store()?;
    store.add_item(name, price, image)?;
    println!("\"{name}\" added to cart.");
    print_view(&store.view());
    Ok(())
}

/// `cart show` - print the current cart.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    print_view(&store.view());
    Ok(())
}

/// `cart inc|dec|remove` - apply an index event and print the new state.
///
/// # Errors
///
/// Returns an error for an index past the end of the cart.
pub fn apply_event(event: CartEvent) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    store.apply(event)?;
    print_view(&store.view());
    Ok(())
}

/// `cart clear` - empty the cart.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be written.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;
    store.clear()?;
    println!("Cart emptied.");
    Ok(())
}
