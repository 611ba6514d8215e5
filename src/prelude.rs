//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::ShoppingCart,
    catalog::{CatalogError, ProductCatalog},
    fixtures::{Fixture, FixtureError},
    items::CartLine,
    pricing::format_total,
    products::{Product, ProductId},
    receipt::{ReceiptError, write_cart, write_products},
};
