//! Shopping Cart
//!
//! An ordered list of cart lines with at most one line per product id. Lines
//! keep the order in which their product was first added.
//!
//! None of the actions fail: operations on an id that is not in the cart do
//! nothing, and quantities are stored exactly as given.

use rusty_money::{
    Money,
    iso::{Currency, EUR},
};
use tracing::debug;

use crate::{
    items::CartLine,
    pricing::{format_total, total_price},
    products::ProductId,
};

/// Shopping Cart
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl ShoppingCart {
    /// Create a new, empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        ShoppingCart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add a line, or merge it into the existing line for the same product.
    ///
    /// When the product is already in the cart its quantity becomes the sum of
    /// both quantities and the existing snapshot is kept. Otherwise the line is
    /// appended at the end.
    pub fn add_to_cart(&mut self, line: CartLine) {
        let id = line.id();

        if let Some(existing) = self.lines.iter_mut().find(|existing| existing.id() == id) {
            let quantity = existing.quantity().saturating_add(line.quantity());

            existing.set_quantity(quantity);

            debug!(%id, quantity, "merged cart line");
        } else {
            debug!(%id, quantity = line.quantity(), "added cart line");

            self.lines.push(line);
        }
    }

    /// Remove the line for a product. Does nothing if it is not in the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        if let Some(index) = self.lines.iter().position(|line| line.id() == id) {
            self.lines.remove(index);

            debug!(%id, lines = self.lines.len(), "removed cart line");
        }
    }

    /// Overwrite the quantity of a line. Does nothing if it is not in the cart.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == id) {
            line.set_quantity(quantity);

            debug!(%id, quantity, "updated cart line quantity");
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.lines.clear();

        debug!("cleared cart");
    }

    /// Number of distinct lines, not the sum of their quantities.
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of `price * quantity` over every line, unrounded.
    #[must_use]
    pub fn cart_total(&self) -> Money<'static, Currency> {
        total_price(&self.lines, self.currency)
    }

    /// The cart total with two decimals and the currency symbol, e.g. `55.48 €`.
    #[must_use]
    pub fn formatted_cart_total(&self) -> String {
        format_total(&self.cart_total())
    }

    /// Get the line for a product, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Get all lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new(EUR)
    }
}
