//! # kiosk - Terminal Demo Shell
//!
//! Thin shell over `kiosk-core`: seeds a demo catalog, subscribes a logging
//! listener to the cart, and walks the full add → save → add → restore →
//! checkout flow. This binary plays the role a UI would in a real shop.

mod render;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_core::{
    CardTerminal, CartEntry, CartListener, CartStore, Catalog, History, LegacyRegister,
    ListenerError, Money, PaymentGateway, Product, SharedCart, TerminalAdapter,
};
use render::{CartView, LineRenderer, PlainRenderer, ReceiptRenderer};

// =============================================================================
// CLI Definition
// =============================================================================

#[derive(Parser)]
#[command(name = "kiosk", about = "Observable, snapshot-able cart state demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the scripted shop demo (add, snapshot, undo, checkout)
    Demo {
        /// Which payment gateway takes the final charge
        #[arg(short, long, value_enum, default_value = "card")]
        gateway: Gateway,

        /// Print the final cart as JSON instead of a receipt
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Gateway {
    /// The old cash register
    Legacy,
    /// The new card terminal, behind its adapter
    Card,
}

// =============================================================================
// Listener
// =============================================================================

/// Bridges cart notifications into the log stream.
struct LogListener;

impl CartListener for LogListener {
    fn notify(&mut self, message: &str) -> Result<(), ListenerError> {
        info!(target: "kiosk::cart", "{message}");
        Ok(())
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("kiosk v{}", env!("CARGO_PKG_VERSION"));
            println!("core: one cart, append-only history, ordered fan-out");
        }
        Commands::Demo { gateway, json } => run_demo(gateway, json)?,
    }

    Ok(())
}

// =============================================================================
// Demo Flow
// =============================================================================

/// Seeds the shelf the demo sells from.
fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Product::new("PC-1", "Computer 1", Money::from_cents(100_000)));
    catalog.add(Product::new("PC-2", "Computer 2", Money::from_cents(150_000)));
    catalog.add(Product::new("PC-3", "Computer 3", Money::from_cents(200_000)));
    catalog
}

/// Adds the product with `sku` to the cart, freezing its current price.
fn add_to_cart(cart: &SharedCart, catalog: &Catalog, sku: &str) -> anyhow::Result<()> {
    let product = catalog
        .get_by_sku(sku)
        .with_context(|| format!("unknown SKU {sku}"))?;
    let entry = CartEntry::from_product(product);
    cart.with_cart_mut(|c| c.add_entry(entry));
    Ok(())
}

fn run_demo(gateway: Gateway, json: bool) -> anyhow::Result<()> {
    let catalog = seed_catalog();

    // The one logical cart: built here, passed around by handle.
    let cart = SharedCart::new(CartStore::new());
    cart.with_cart_mut(|c| c.subscribe(Box::new(LogListener)));

    // The caretaker lives at the composition layer, next to the cart.
    let mut history = History::new();

    let plain = PlainRenderer;
    let shelf = CartView::new(Box::new(PlainRenderer));
    println!("-- shelf --");
    for product in catalog.products() {
        println!("{}", plain.entry_line(&CartEntry::from_product(product)));
    }

    // Add two machines, then save the state we might want back.
    add_to_cart(&cart, &catalog, "PC-1")?;
    add_to_cart(&cart, &catalog, "PC-2")?;
    cart.with_cart(|c| history.save_state(c.entries()));
    info!("cart state saved at index {}", history.last_index().unwrap_or(0));

    // A third machine goes in... and the customer changes their mind.
    add_to_cart(&cart, &catalog, "PC-3")?;
    println!("\n-- cart before undo --");
    println!("{}", cart.with_cart(|c| shelf.render(c.entries())));

    cart.with_cart_mut(|c| c.replace_entries(history.restore_last()));
    info!("cart state restored");

    if json {
        let entries = cart.with_cart(|c| c.entries().to_vec());
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("\n-- receipt --");
    let receipt_view = CartView::new(Box::new(ReceiptRenderer::new()));
    println!("{}", cart.with_cart(|c| receipt_view.render(c.entries())));

    let gateway: Box<dyn PaymentGateway> = match gateway {
        Gateway::Legacy => Box::new(LegacyRegister::new()),
        Gateway::Card => Box::new(TerminalAdapter::new(CardTerminal::new())),
    };
    let total = cart.with_cart(|c| c.total());
    if total.is_zero() {
        bail!("nothing to charge");
    }
    let receipt = gateway
        .charge(total)
        .context("checkout failed")?;
    println!(
        "paid {} via {} (ref {})",
        receipt.amount, receipt.gateway, receipt.reference
    );

    Ok(())
}
