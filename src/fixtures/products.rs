//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Findable, Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products, in catalog order
    pub products: Vec<ProductFixture>,
}

impl ProductsFixture {
    /// Parse a products fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Convert every fixture into a [`Product`], keeping fixture order.
    ///
    /// # Errors
    ///
    /// Returns an error if any price cannot be parsed.
    pub fn into_products(self) -> Result<Vec<Product>, FixtureError> {
        self.products.into_iter().map(Product::try_from).collect()
    }
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Product title
    pub title: String,

    /// Product price (e.g., "19.99 EUR")
    pub price: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Availability flag
    pub in_stock: bool,

    /// Image path or URL
    #[serde(default)]
    pub image: String,

    /// Long-form details
    #[serde(default)]
    pub details: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id,
            title: fixture.title,
            price: Money::from_minor(minor_units, currency),
            description: fixture.description,
            in_stock: fixture.in_stock,
            image: fixture.image,
            details: fixture.details,
        })
    }
}

/// Parse price string (e.g., "19.99 EUR") into minor units and currency
///
/// Any ISO 4217 code is accepted. The amount may not carry more fractional
/// digits than the currency has minor units.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal representable in minor units, or if the
/// currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let Some((amount, code)) = s.trim().split_once(char::is_whitespace) else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let code = code.trim();

    let currency =
        Currency::find(code).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?
        .normalize();

    if amount.scale() > currency.exponent {
        return Err(FixtureError::InvalidPrice(format!(
            "{s} has more than {} fractional digits",
            currency.exponent
        )));
    }

    let minor_units = Decimal::from(10_i64.pow(currency.exponent))
        .checked_mul(amount)
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{EUR, GBP, JPY, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99EUR");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unparseable_amount() {
        let result = parse_price("abc EUR");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_accepts_known_currencies() -> TestResult {
        let (eur_minor, eur) = parse_price("15.50 EUR")?;
        let (usd_minor, usd) = parse_price("1.00 USD")?;
        let (gbp_minor, gbp) = parse_price("2.99 GBP")?;

        assert_eq!(eur_minor, 15_50);
        assert_eq!(eur, EUR);
        assert_eq!(usd_minor, 1_00);
        assert_eq!(usd, USD);
        assert_eq!(gbp_minor, 2_99);
        assert_eq!(gbp, GBP);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_sub_minor_unit_amounts() {
        for price in ["19.995 EUR", "19.985 EUR", "5.5 JPY"] {
            assert!(
                matches!(parse_price(price), Err(FixtureError::InvalidPrice(_))),
                "{price} should be rejected"
            );
        }
    }

    #[test]
    fn parse_price_scales_by_currency_exponent() -> TestResult {
        let (yen_minor, yen) = parse_price("500 JPY")?;
        let (padded_minor, _) = parse_price("19.990 EUR")?;

        assert_eq!(yen_minor, 500);
        assert_eq!(yen, JPY);
        assert_eq!(padded_minor, 19_99);

        Ok(())
    }

    #[test]
    fn from_yaml_keeps_fixture_order() -> TestResult {
        let fixture = ProductsFixture::from_yaml(
            "products:\n  - id: 9\n    title: Nine\n    price: 9.00 EUR\n    in_stock: false\n  - id: 4\n    title: Four\n    price: 4.00 EUR\n    in_stock: true\n",
        )?;

        let products = fixture.into_products()?;
        let ids: Vec<u32> = products.iter().map(|product| product.id.get()).collect();

        assert_eq!(ids, vec![9, 4]);
        assert!(products.iter().all(|product| product.image.is_empty()));

        Ok(())
    }

    #[test]
    fn from_yaml_rejects_malformed_yaml() {
        let result = ProductsFixture::from_yaml("products: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn into_products_propagates_price_errors() -> TestResult {
        let fixture = ProductsFixture::from_yaml(
            "products:\n  - id: 1\n    title: One\n    price: 1.00 XYZ\n    in_stock: true\n",
        )?;

        assert!(matches!(
            fixture.into_products(),
            Err(FixtureError::UnknownCurrency(_))
        ));

        Ok(())
    }
}
