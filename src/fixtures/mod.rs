//! Fixtures
//!
//! Product seed data lives in YAML files under `<base>/products/<name>.yml`.
//! The default storefront seed is embedded in the library so a catalog can be
//! built without touching the filesystem.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{fixtures::products::ProductsFixture, products::Product};

pub mod products;

/// Embedded default product seed.
pub const STOREFRONT_PRODUCTS: &str = include_str!("../../fixtures/products/storefront.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load products from a YAML fixture file, in file order
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a price is invalid.
    pub fn load_products(&self, name: &str) -> Result<Vec<Product>, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        ProductsFixture::from_yaml(&contents)?.into_products()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the embedded storefront seed.
///
/// # Errors
///
/// Returns an error if the embedded seed is malformed.
pub fn storefront_products() -> Result<Vec<Product>, FixtureError> {
    ProductsFixture::from_yaml(STOREFRONT_PRODUCTS)?.into_products()
}
