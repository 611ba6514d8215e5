//! Product Catalog
//!
//! A fixed, ordered set of products. The catalog is validated once when it is
//! built and exposes no way to change it afterwards.

use rustc_hash::FxHashSet;
use rusty_money::iso::{Currency, EUR};
use thiserror::Error;
use tracing::debug;

use crate::{
    fixtures::{Fixture, FixtureError, storefront_products},
    products::{Product, ProductId},
};

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("Product id {0} appears more than once")]
    DuplicateProduct(ProductId),

    /// A product's currency differs from the catalog currency (product id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Seed data could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// Product Catalog
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    currency: &'static Currency,
}

impl ProductCatalog {
    /// Build a catalog from products, keeping their order.
    ///
    /// The catalog currency is taken from the first product (EUR when empty).
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if ids are not unique or currencies differ.
    pub fn new(products: impl Into<Vec<Product>>) -> Result<Self, CatalogError> {
        let products = products.into();

        let currency = products
            .first()
            .map_or(EUR, |product| product.price.currency());

        let mut seen = FxHashSet::default();

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }

            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    product.id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
        }

        debug!(
            products = products.len(),
            currency = currency.iso_alpha_code,
            "catalog built"
        );

        Ok(Self { products, currency })
    }

    /// Build the catalog from the embedded storefront seed.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the seed cannot be parsed or is invalid.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(storefront_products()?)
    }

    /// Build the catalog from a named fixture set on disk.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the fixture cannot be loaded or is invalid.
    pub fn from_fixture(fixture: &Fixture, name: &str) -> Result<Self, CatalogError> {
        Self::new(fixture.load_products(name)?)
    }

    /// Find a product by id. A missing id is `None`, never an error.
    pub fn get_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Every in-stock product, in catalog order.
    ///
    /// Returns owned copies; the catalog itself cannot be changed through them.
    pub fn list_in_stock(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| product.in_stock)
            .cloned()
            .collect()
    }

    /// Iterate over all products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
