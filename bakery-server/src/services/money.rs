//! Money arithmetic
//!
//! Amounts are `f64` on the wire and in the store. Sums are accumulated as
//! `Decimal` so that e.g. 0.1 + 0.2 reports 0.3. Every operation is checked:
//! a value that does not fit a `Decimal` falls back to plain `f64` math
//! instead of failing the request.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal; `None` for non-finite or out-of-range values
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum amounts as entered, without rounding; empty input sums to 0.0
pub fn sum_amounts(amounts: impl IntoIterator<Item = f64>) -> f64 {
    let amounts: Vec<f64> = amounts.into_iter().collect();
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |acc, &v| acc.checked_add(to_decimal(v)?))
        .and_then(|sum| sum.to_f64())
        .unwrap_or_else(|| amounts.iter().sum())
}

/// `price * quantity`, rounded
pub fn line_total(price: f64, quantity: i32) -> f64 {
    to_decimal(price)
        .and_then(|p| p.checked_mul(Decimal::from(quantity)))
        .map(to_f64)
        .unwrap_or_else(|| price * f64::from(quantity))
}
