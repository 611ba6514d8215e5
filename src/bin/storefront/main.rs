//! Storefront demo
//!
//! Loads the product catalog, fills a cart from `--add` flags and prints both.

use std::{io, process::ExitCode};

use thiserror::Error;
use tracing::{error, info, warn};

use storefront::{
    cart::ShoppingCart,
    catalog::{CatalogError, ProductCatalog},
    fixtures::Fixture,
    receipt::{ReceiptError, write_cart, write_products},
};

use crate::config::StorefrontConfig;

mod config;
mod logging;

/// Errors that end the demo run.
#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

fn main() -> ExitCode {
    let config = match StorefrontConfig::load() {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    if let Err(err) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "storefront demo failed");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &StorefrontConfig) -> Result<(), DemoError> {
    let catalog = match &config.fixtures {
        Some(path) => ProductCatalog::from_fixture(&Fixture::with_base_path(path), &config.set)?,
        None => ProductCatalog::seeded()?,
    };

    info!(
        products = catalog.len(),
        currency = catalog.currency().iso_alpha_code,
        "catalog loaded"
    );

    let mut cart = ShoppingCart::new(catalog.currency());

    for spec in &config.add {
        match catalog.get_product_by_id(spec.id) {
            Some(product) => cart.add_to_cart(product.with_quantity(spec.quantity)),
            None => warn!(id = %spec.id, "unknown product, skipping"),
        }
    }

    let mut out = io::stdout().lock();

    write_products(&mut out, &catalog.list_in_stock())?;
    write_cart(&mut out, &cart)?;

    info!(
        lines = cart.cart_count(),
        total = %cart.formatted_cart_total(),
        "cart summary written"
    );

    Ok(())
}
