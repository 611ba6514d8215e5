//! Receipt
//!
//! Plain-text tables for the catalog and the cart.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::ShoppingCart, pricing::format_total, products::Product};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Failed to write to the output.
    #[error("failed to write receipt")]
    IO,
}

/// Write a table of products.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_products<'a>(
    mut out: impl io::Write,
    products: impl IntoIterator<Item = &'a Product>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Product", "Description", "Price", "In Stock"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.description.clone(),
            format_total(&product.price),
            if product.in_stock { "yes" } else { "no" }.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)
}

/// Write the cart lines followed by the line count and total.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_cart(mut out: impl io::Write, cart: &ShoppingCart) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Product", "Unit Price", "Quantity", "Line Total"]);

    for line in cart.iter() {
        builder.push_record([
            line.id().to_string(),
            line.title().to_string(),
            format_total(line.price()),
            line.quantity().to_string(),
            format_total(&line.line_total()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;
    writeln!(out, " Lines: {}", cart.cart_count()).map_err(|_err| ReceiptError::IO)?;
    writeln!(out, " Total: {}", cart.formatted_cart_total()).map_err(|_err| ReceiptError::IO)
}
