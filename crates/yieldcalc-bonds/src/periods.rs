//! Coupon period model.

/// Number of coupon periods remaining.
///
/// `round(years_to_maturity * frequency)`, never less than one. Halves round
/// away from zero, so 2.5 periods become 3.
#[must_use]
pub fn number_of_periods(years_to_maturity: f64, frequency: u32) -> u32 {
    (years_to_maturity * f64::from(frequency)).round().max(1.0) as u32
}

/// Coupon paid each period.
#[must_use]
pub fn coupon_per_period(face_value: f64, coupon_rate: f64, frequency: u32) -> f64 {
    face_value * coupon_rate / f64::from(frequency)
}
