//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::ops::Mul;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is not a decimal number.
    #[error("price is not a valid number: {0}")]
    NotANumber(String),
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative unit price in the store currency.
///
/// Prices use `Decimal` rather than floating point so that cart totals
/// are exact. Display formats to exactly two decimal places, which is
/// the format every cart and checkout view renders.
///
/// ## Examples
///
/// ```
/// use pulse_gear_core::Price;
///
/// let price: Price = "50".parse().unwrap();
/// assert_eq!(price.to_string(), "50.00");
/// assert!("-1.50".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| PriceError::NotANumber(s.to_owned()))?;
        Self::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Mul<u32> for Price {
    type Output = Decimal;

    fn mul(self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_two_decimal_places() {
        let price: Price = "50".parse().unwrap();
        assert_eq!(price.to_string(), "50.00");

        let price: Price = "19.9".parse().unwrap();
        assert_eq!(price.to_string(), "19.90");

        let price: Price = "0".parse().unwrap();
        assert_eq!(price.to_string(), "0.00");
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(matches!(
            "-3.50".parse::<Price>(),
            Err(PriceError::Negative(_))
        ));
        assert!(matches!(
            "abc".parse::<Price>(),
            Err(PriceError::NotANumber(_))
        ));
        assert!("".parse::<Price>().is_err());
    }

    #[test]
    fn multiplies_by_quantity() {
        let price: Price = "50.00".parse().unwrap();
        assert_eq!(price * 2, Decimal::from(100));
    }

    #[test]
    fn serde_round_trips_as_string() {
        let price: Price = "129.99".parse().unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, back);
    }
}
