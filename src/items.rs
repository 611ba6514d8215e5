//! Items
//!
//! Cart lines hold their own copy of the product they were created from, so
//! later catalog changes never leak into an existing cart.

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::line_total,
    products::{Product, ProductId},
};

/// A product snapshot together with the quantity requested.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: i64,
}

impl CartLine {
    /// Creates a new line from a product and a quantity.
    ///
    /// The quantity is stored as given, including zero or negative values.
    #[must_use]
    pub fn new(product: &Product, quantity: i64) -> Self {
        Self {
            product: product.clone(),
            quantity,
        }
    }

    /// Returns the product id of the line
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Returns the product snapshot
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the title of the product
    pub fn title(&self) -> &str {
        &self.product.title
    }

    /// Returns the unit price of the line
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.product.price
    }

    /// Returns the short description of the product
    pub fn description(&self) -> &str {
        &self.product.description
    }

    /// Returns whether the product was in stock when the line was created
    pub fn in_stock(&self) -> bool {
        self.product.in_stock
    }

    /// Returns the image reference of the product
    pub fn image(&self) -> &str {
        &self.product.image
    }

    /// Returns the long-form details of the product
    pub fn details(&self) -> &str {
        &self.product.details
    }

    /// Returns the requested quantity
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Returns `price * quantity` for this line.
    pub fn line_total(&self) -> Money<'static, Currency> {
        line_total(&self.product.price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;

    use super::*;

    fn product(price_minor: i64) -> Product {
        Product {
            id: ProductId::new(1),
            title: "Produit A".to_string(),
            price: Money::from_minor(price_minor, EUR),
            description: "Un produit".to_string(),
            in_stock: true,
            image: "/images/product-a.jpg".to_string(),
            details: "Details".to_string(),
        }
    }

    #[test]
    fn accessors_expose_snapshot_fields() {
        let line = CartLine::new(&product(19_99), 2);

        assert_eq!(line.id(), ProductId::new(1));
        assert_eq!(line.title(), "Produit A");
        assert_eq!(line.price(), &Money::from_minor(19_99, EUR));
        assert_eq!(line.description(), "Un produit");
        assert!(line.in_stock());
        assert_eq!(line.image(), "/images/product-a.jpg");
        assert_eq!(line.details(), "Details");
        assert_eq!(line.quantity(), 2);
    }

    #[test]
    fn line_is_independent_of_source_product() {
        let mut source = product(19_99);
        let line = CartLine::new(&source, 1);

        source.title = "Renamed".to_string();
        source.price = Money::from_minor(1, EUR);

        assert_eq!(line.title(), "Produit A");
        assert_eq!(line.price(), &Money::from_minor(19_99, EUR));
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let line = CartLine::new(&product(19_99), 2);

        assert_eq!(line.line_total(), Money::from_minor(39_98, EUR));
    }

    #[test]
    fn negative_quantity_yields_negative_line_total() {
        let line = CartLine::new(&product(10_00), -2);

        assert_eq!(line.line_total(), Money::from_minor(-20_00, EUR));
    }
}
