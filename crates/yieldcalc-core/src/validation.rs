//! Request validation.
//!
//! The engine assumes its inputs are already well-formed. This module is the
//! boundary that enforces that: it checks a raw [`BondCalculationRequest`]
//! (coupon rate given as a percentage) against [`ValidationRules`] and turns it
//! into a [`BondInput`] with a decimal coupon rate.
//!
//! Every rule is evaluated; a failing request reports all of its problems at once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BondInput, Date};

/// Coupon frequencies accepted when no configuration overrides them.
///
/// Monthly (12) is accepted alongside annual, semi-annual and quarterly on
/// purpose; drop it through [`ValidationRules::with_allowed_frequencies`] to
/// restrict requests to 1, 2 and 4.
pub const DEFAULT_ALLOWED_FREQUENCIES: [u32; 4] = [1, 2, 4, 12];

/// Largest schedule a request may produce when no configuration overrides it
/// (1000 years of monthly coupons).
pub const DEFAULT_MAX_PERIODS: u32 = 12_000;

/// Upper bound for the percentage coupon rate.
const MAX_COUPON_PERCENT: f64 = 100.0;

/// A request that failed one or more validation rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", .details.join("; "))]
pub struct ValidationError {
    /// One message per failed rule, in field order.
    pub details: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error from a list of messages.
    #[must_use]
    pub fn new(details: Vec<String>) -> Self {
        Self { details }
    }
}

/// Rules applied on top of the fixed range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Coupon frequencies a request may use.
    #[serde(default = "default_allowed_frequencies")]
    pub allowed_frequencies: Vec<u32>,

    /// Upper limit on `round(yearsToMaturity * frequency)`.
    #[serde(default = "default_max_periods")]
    pub max_periods: u32,
}

fn default_allowed_frequencies() -> Vec<u32> {
    DEFAULT_ALLOWED_FREQUENCIES.to_vec()
}

fn default_max_periods() -> u32 {
    DEFAULT_MAX_PERIODS
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            allowed_frequencies: default_allowed_frequencies(),
            max_periods: default_max_periods(),
        }
    }
}

impl ValidationRules {
    /// Creates rules with a custom set of allowed frequencies.
    #[must_use]
    pub fn with_allowed_frequencies(mut self, frequencies: impl Into<Vec<u32>>) -> Self {
        self.allowed_frequencies = frequencies.into();
        self
    }

    /// Sets the largest number of coupon periods a request may produce.
    #[must_use]
    pub fn with_max_periods(mut self, max_periods: u32) -> Self {
        self.max_periods = max_periods;
        self
    }
}

/// Raw calculation request as received from a caller.
///
/// Every field is optional so that missing values are reported as validation
/// failures rather than deserialization errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondCalculationRequest {
    /// Face (par) value.
    pub face_value: Option<f64>,
    /// Annual coupon rate as a percentage (5 for 5%).
    pub coupon_rate: Option<f64>,
    /// Current market price.
    pub market_price: Option<f64>,
    /// Years remaining to maturity.
    pub years_to_maturity: Option<f64>,
    /// Coupon payments per year.
    pub frequency: Option<f64>,
    /// First payment date (`YYYY-MM-DD`). Defaults to today at the transport edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl BondCalculationRequest {
    /// Creates a complete request without a start date.
    #[must_use]
    pub fn new(
        face_value: f64,
        coupon_rate_percent: f64,
        market_price: f64,
        years_to_maturity: f64,
        frequency: u32,
    ) -> Self {
        Self {
            face_value: Some(face_value),
            coupon_rate: Some(coupon_rate_percent),
            market_price: Some(market_price),
            years_to_maturity: Some(years_to_maturity),
            frequency: Some(f64::from(frequency)),
            start_date: None,
        }
    }

    /// Sets the start date.
    #[must_use]
    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    /// Validates the request and converts it into engine input.
    ///
    /// Returns the bond input (coupon rate divided by 100) and the parsed start
    /// date, if one was supplied.
    pub fn validate(
        &self,
        rules: &ValidationRules,
    ) -> Result<(BondInput, Option<Date>), ValidationError> {
        let mut details = Vec::new();

        let face_value = check_positive("faceValue", self.face_value, &mut details);
        let coupon_rate = check_coupon(self.coupon_rate, &mut details);
        let market_price = check_positive("marketPrice", self.market_price, &mut details);
        let years_to_maturity =
            check_positive("yearsToMaturity", self.years_to_maturity, &mut details);
        let frequency = check_frequency(self.frequency, rules, &mut details);
        if let (Some(years), Some(freq)) = (years_to_maturity, frequency) {
            check_period_count(years, freq, rules, &mut details);
        }

        let start_date = match self.start_date.as_deref() {
            Some(s) => match Date::parse(s) {
                Ok(date) => Some(date),
                Err(_) => {
                    details.push("\"startDate\" must be a valid date in YYYY-MM-DD format".into());
                    None
                }
            },
            None => None,
        };

        match (face_value, coupon_rate, market_price, years_to_maturity, frequency) {
            (Some(face), Some(coupon), Some(price), Some(years), Some(freq)) if details.is_empty() => {
                let input = BondInput::new(face, coupon / 100.0, price, years, freq);
                log::trace!("validated bond request: {:?}", input);
                Ok((input, start_date))
            }
            _ => Err(ValidationError::new(details)),
        }
    }
}

fn check_present(field: &str, value: Option<f64>, details: &mut Vec<String>) -> Option<f64> {
    match value {
        None => {
            details.push(format!("\"{field}\" is required"));
            None
        }
        Some(v) if !v.is_finite() => {
            details.push(format!("\"{field}\" must be a finite number"));
            None
        }
        Some(v) => Some(v),
    }
}

fn check_positive(field: &str, value: Option<f64>, details: &mut Vec<String>) -> Option<f64> {
    let v = check_present(field, value, details)?;
    if v <= 0.0 {
        details.push(format!("\"{field}\" must be a positive number"));
        return None;
    }
    Some(v)
}

fn check_coupon(value: Option<f64>, details: &mut Vec<String>) -> Option<f64> {
    let v = check_present("couponRate", value, details)?;
    if v < 0.0 {
        details.push("\"couponRate\" must be greater than or equal to 0".into());
        return None;
    }
    if v > MAX_COUPON_PERCENT {
        details.push("\"couponRate\" must be less than or equal to 100".into());
        return None;
    }
    Some(v)
}

fn check_period_count(
    years: f64,
    frequency: u32,
    rules: &ValidationRules,
    details: &mut Vec<String>,
) {
    let periods = (years * f64::from(frequency)).round();
    if periods > f64::from(rules.max_periods) {
        details.push(format!(
            "\"yearsToMaturity\" must not produce more than {} coupon periods",
            rules.max_periods
        ));
    }
}

fn check_frequency(
    value: Option<f64>,
    rules: &ValidationRules,
    details: &mut Vec<String>,
) -> Option<u32> {
    let v = check_present("frequency", value, details)?;
    if v.fract() != 0.0 {
        details.push("\"frequency\" must be an integer".into());
        return None;
    }
    if v <= 0.0 || v > f64::from(u32::MAX) {
        details.push("\"frequency\" must be a positive number".into());
        return None;
    }
    let freq = v as u32;
    if !rules.allowed_frequencies.contains(&freq) {
        let allowed: Vec<String> = rules
            .allowed_frequencies
            .iter()
            .map(ToString::to_string)
            .collect();
        details.push(format!(
            "\"frequency\" must be one of [{}]",
            allowed.join(", ")
        ));
        return None;
    }
    Some(freq)
}
