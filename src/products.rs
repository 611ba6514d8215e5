//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::items::CartLine;

/// Product identifier, assigned when the catalog is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product identifier from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub title: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Short description
    pub description: String,

    /// Whether the product can currently be bought
    pub in_stock: bool,

    /// Image path or URL
    pub image: String,

    /// Long-form details
    pub details: String,
}

impl Product {
    /// Snapshots this product into a cart line with the given quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: i64) -> CartLine {
        CartLine::new(self, quantity)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(7),
            title: "Lamp".to_string(),
            price: Money::from_minor(12_50, EUR),
            description: "A lamp".to_string(),
            in_stock: true,
            image: "/images/lamp.jpg".to_string(),
            details: "Brass".to_string(),
        }
    }

    #[test]
    fn product_id_round_trips_raw_value() {
        let id = ProductId::from(42);

        assert_eq!(id.get(), 42);
        assert_eq!(id, ProductId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn with_quantity_snapshots_product() {
        let product = product();
        let line = product.with_quantity(3);

        assert_eq!(line.id(), ProductId::new(7));
        assert_eq!(line.quantity(), 3);
        assert_eq!(line.product(), &product);
    }
}
