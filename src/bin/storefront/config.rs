//! Demo configuration

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use storefront::products::ProductId;

use crate::logging::LoggingArgs;

/// Storefront catalog and cart demo
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and cart demo", long_about = None)]
pub(crate) struct StorefrontConfig {
    /// Directory containing `products/<set>.yml`; the embedded seed is used when absent
    #[arg(long, env = "STOREFRONT_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// Fixture set name
    #[arg(long, env = "STOREFRONT_FIXTURE_SET", default_value = "storefront")]
    pub set: String,

    /// Product to add to the cart, as `ID` or `ID:QUANTITY` (repeatable)
    #[arg(short, long = "add", value_name = "ID[:QUANTITY]")]
    pub add: Vec<LineSpec>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl StorefrontConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// A product id and the quantity to add for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LineSpec {
    pub id: ProductId,
    pub quantity: i64,
}

impl FromStr for LineSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => (id, Some(quantity)),
            None => (s, None),
        };

        let id = id
            .trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid product id '{id}': {err}"))?;

        let quantity = match quantity {
            Some(quantity) => quantity
                .trim()
                .parse::<i64>()
                .map_err(|err| format!("invalid quantity '{quantity}': {err}"))?,
            None => 1,
        };

        Ok(Self {
            id: ProductId::new(id),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn line_spec_defaults_quantity_to_one() -> TestResult {
        let spec: LineSpec = "2".parse()?;

        assert_eq!(
            spec,
            LineSpec {
                id: ProductId::new(2),
                quantity: 1
            }
        );

        Ok(())
    }

    #[test]
    fn line_spec_parses_quantity() -> TestResult {
        let spec: LineSpec = "1:5".parse()?;

        assert_eq!(spec.id, ProductId::new(1));
        assert_eq!(spec.quantity, 5);

        Ok(())
    }

    #[test]
    fn line_spec_allows_negative_quantity() -> TestResult {
        let spec: LineSpec = "1:-2".parse()?;

        assert_eq!(spec.quantity, -2);

        Ok(())
    }

    #[test]
    fn line_spec_rejects_garbage() {
        assert!("x".parse::<LineSpec>().is_err());
        assert!("1:y".parse::<LineSpec>().is_err());
    }

    #[test]
    fn config_parses_repeated_add_flags() -> TestResult {
        let config =
            StorefrontConfig::try_parse_from(["storefront", "--add", "1:2", "-a", "3"])?;

        assert_eq!(config.add.len(), 2);
        assert_eq!(config.set, "storefront");
        assert!(config.fixtures.is_none());

        Ok(())
    }
}
