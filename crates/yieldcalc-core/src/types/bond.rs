//! Bond input and price classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated inputs to a bond yield calculation.
///
/// All values are expected to satisfy the engine's preconditions, which the
/// validation layer enforces:
///
/// - `face_value > 0`
/// - `0 <= coupon_rate <= 1` (a decimal fraction, not a percentage)
/// - `market_price > 0`
/// - `years_to_maturity > 0`
/// - `frequency >= 1`
///
/// # Example
///
/// ```rust
/// use yieldcalc_core::types::BondInput;
///
/// let bond = BondInput::new(1000.0, 0.05, 950.0, 10.0, 2);
/// assert_eq!(bond.annual_coupon(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondInput {
    /// Principal repaid at maturity.
    pub face_value: f64,
    /// Annual coupon rate as a decimal (0.05 for 5%).
    pub coupon_rate: f64,
    /// Current market price.
    pub market_price: f64,
    /// Time to maturity in years.
    pub years_to_maturity: f64,
    /// Coupon payments per year.
    pub frequency: u32,
}

impl BondInput {
    /// Creates a new bond input.
    #[must_use]
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        market_price: f64,
        years_to_maturity: f64,
        frequency: u32,
    ) -> Self {
        Self {
            face_value,
            coupon_rate,
            market_price,
            years_to_maturity,
            frequency,
        }
    }

    /// Returns a copy with a different market price.
    #[must_use]
    pub fn with_market_price(mut self, market_price: f64) -> Self {
        self.market_price = market_price;
        self
    }

    /// Annual coupon amount (`face_value * coupon_rate`).
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.face_value * self.coupon_rate
    }
}

/// Classification of market price relative to face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceClassification {
    /// Trading below face value.
    Discount,
    /// Trading exactly at face value.
    Par,
    /// Trading above face value.
    Premium,
}

impl PriceClassification {
    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceClassification::Discount => "discount",
            PriceClassification::Par => "par",
            PriceClassification::Premium => "premium",
        }
    }
}

impl fmt::Display for PriceClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_coupon() {
        let bond = BondInput::new(1000.0, 0.1, 1000.0, 5.0, 1);
        assert_eq!(bond.annual_coupon(), 100.0);
    }

    #[test]
    fn test_with_market_price() {
        let bond = BondInput::new(1000.0, 0.1, 1000.0, 5.0, 1).with_market_price(900.0);
        assert_eq!(bond.market_price, 900.0);
        assert_eq!(bond.face_value, 1000.0);
    }

    #[test]
    fn test_classification_serde() {
        let json = serde_json::to_string(&PriceClassification::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
        let parsed: PriceClassification = serde_json::from_str("\"discount\"").unwrap();
        assert_eq!(parsed, PriceClassification::Discount);
        assert_eq!(PriceClassification::Par.to_string(), "par");
    }

    #[test]
    fn test_input_serde_camel_case() {
        let bond = BondInput::new(1000.0, 0.1, 950.0, 5.0, 2);
        let value = serde_json::to_value(bond).unwrap();
        assert_eq!(value["faceValue"], 1000.0);
        assert_eq!(value["yearsToMaturity"], 5.0);
    }
}
