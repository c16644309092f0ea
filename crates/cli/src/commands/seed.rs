//! Seed the catalog with the demo products.

use tracing::info;

use pulse_gear_storefront::db::{self, ProductRepository};

/// The demo catalog: name and starting stock.
const CATALOG: &[(&str, i32)] = &[
    ("Mechanical Keyboard", 10),
    ("Gaming Mouse", 15),
    ("Wireless Headset", 8),
    ("Gamer PC", 5),
    ("4K Monitor", 7),
];

/// Insert the demo catalog, resetting stock for products that already
/// exist.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a query fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = super::migrate::database_url()?;
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let repository = ProductRepository::new(&pool);
    for (name, stock) in CATALOG {
        repository.upsert(name, *stock).await?;
        info!(product = name, stock, "Seeded");
    }

    info!(products = CATALOG.len(), "Catalog seeded");
    Ok(())
}
