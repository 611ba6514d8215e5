//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};

use crate::items::CartLine;

/// Calculates `price * quantity`, in the currency of the price.
///
/// Saturates instead of overflowing on absurd quantities.
pub fn line_total(price: &Money<'static, Currency>, quantity: i64) -> Money<'static, Currency> {
    Money::from_minor(
        price.to_minor_units().saturating_mul(quantity),
        price.currency(),
    )
}

/// Calculates the total price of a list of cart lines in the given currency.
///
/// An empty list totals zero. Line currencies are not converted: each line's
/// decimal amount is summed and the sum is expressed in `currency`.
pub fn total_price(lines: &[CartLine], currency: &'static Currency) -> Money<'static, Currency> {
    let amount = lines.iter().fold(Decimal::ZERO, |acc, line| {
        acc.saturating_add(*line.line_total().amount())
    });

    Money::from_decimal(amount, currency)
}

/// Renders an amount with exactly two fractional digits followed by the
/// currency symbol, e.g. `55.48 €`.
///
/// A third fractional digit rounds half away from zero.
pub fn format_total(total: &Money<'_, Currency>) -> String {
    let amount = total
        .amount()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("{amount:.2} {}", total.currency().symbol)
}
