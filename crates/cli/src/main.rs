//! PulseGear CLI - shopping client and database management tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse and shop
//! pulse-cli products
//! pulse-cli cart add "Mechanical Keyboard" --price 50.00
//! pulse-cli cart show
//! pulse-cli checkout --payment card
//!
//! # Operations
//! pulse-cli migrate
//! pulse-cli seed
//! ```
//!
//! The cart lives in a JSON snapshot (`~/.pulsegear/cart.json`, override
//! with `PULSEGEAR_CART_PATH`), loaded when a command starts and fully
//! rewritten after every mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use pulse_gear_core::cart::CartEvent;
use pulse_gear_core::PaymentMethod;

mod api;
mod checkout;
mod commands;
mod storage;

use api::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "pulse-cli")]
#[command(author, version, about = "PulseGear shopping client and tools")]
struct Cli {
    /// Base URL of the stock service
    #[arg(long, global = true, env = "PULSEGEAR_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Drain the cart into sequential purchases
    Checkout {
        /// Payment method (card, wallet, paypal)
        #[arg(short, long, default_value = "card")]
        payment: PaymentMethod,
    },
    /// List products with current stock
    Products,
    /// Run database migrations
    Migrate,
    /// Seed the demo catalog
    Seed,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Product name
        name: String,

        /// Unit price, e.g. 50.00
        #[arg(short, long)]
        price: String,

        /// Product image reference
        #[arg(short, long, default_value = "img/product_1.png")]
        image: String,
    },
    /// Print the cart
    Show,
    /// Increase the quantity of the line at INDEX by one
    Inc { index: usize },
    /// Decrease the quantity of the line at INDEX by one
    Dec { index: usize },
    /// Remove the line at INDEX
    Remove { index: usize },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { name, price, image } => {
                commands::cart::add(&name, &price, &image)?;
            }
            CartAction::Show => commands::cart::show()?,
            CartAction::Inc { index } => {
                commands::cart::apply_event(CartEvent::Increment { index })?;
            }
            CartAction::Dec { index } => {
                commands::cart::apply_event(CartEvent::Decrement { index })?;
            }
            CartAction::Remove { index } => {
                commands::cart::apply_event(CartEvent::Remove { index })?;
            }
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Checkout { payment } => {
            commands::checkout::run(&cli.api_url, payment).await?;
        }
        Commands::Products => commands::products::run(&cli.api_url).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
