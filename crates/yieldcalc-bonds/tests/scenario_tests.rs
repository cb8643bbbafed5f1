//! End-to-end scenarios for the bond calculator.
//!
//! Each scenario runs a full calculation and checks the reported metrics
//! and schedule together.

use approx::assert_relative_eq;

use yieldcalc_bonds::prelude::*;
use yieldcalc_core::types::{BondInput, Date, PriceClassification};

fn start() -> Date {
    Date::from_ymd(2025, 1, 15).unwrap()
}

// =============================================================================
// CONCRETE SCENARIOS
// =============================================================================

#[test]
fn par_bond_annual() {
    let bond = BondInput::new(1000.0, 0.10, 1000.0, 5.0, 1);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    assert_eq!(result.current_yield, 0.1);
    assert_relative_eq!(result.yield_to_maturity, 0.1, epsilon = 1e-6);
    assert_eq!(result.total_interest, 500.0);
    assert_eq!(result.price_classification, PriceClassification::Par);

    let dates: Vec<String> = result
        .cash_flows
        .iter()
        .map(|cf| cf.payment_date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2025-01-15", "2026-01-15", "2027-01-15", "2028-01-15", "2029-01-15"]
    );
}

#[test]
fn discount_bond_annual() {
    let bond = BondInput::new(1000.0, 0.10, 900.0, 5.0, 1);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    assert_relative_eq!(result.current_yield, 0.111_11, epsilon = 1e-5);
    assert!(result.yield_to_maturity > 0.1);
    assert_eq!(result.price_classification, PriceClassification::Discount);
    assert_eq!(result.cash_flows.len(), 5);
}

#[test]
fn premium_bond_semi_annual() {
    let bond = BondInput::new(1000.0, 0.10, 1100.0, 5.0, 2);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    assert_relative_eq!(result.current_yield, 0.090_91, epsilon = 1e-5);
    assert!(result.yield_to_maturity < 0.1);
    assert_eq!(result.price_classification, PriceClassification::Premium);

    assert_eq!(result.cash_flows.len(), 10);
    assert!(result.cash_flows.iter().all(|cf| cf.coupon_payment == 50.0));
    assert_eq!(result.cash_flows[1].payment_date.to_string(), "2025-07-15");
    assert_eq!(result.cash_flows[9].payment_date.to_string(), "2029-07-15");
}

#[test]
fn quarterly_and_monthly_par_bonds() {
    for frequency in [4, 12] {
        let bond = BondInput::new(5000.0, 0.048, 5000.0, 3.0, frequency);
        let result = BondCalculator::new().calculate(&bond, start()).unwrap();

        assert_relative_eq!(result.yield_to_maturity, 0.048, epsilon = 1e-6);
        assert_eq!(result.cash_flows.len(), 3 * frequency as usize);
    }
}

#[test]
fn fractional_term_rounds_periods() {
    // 2.4 years annual rounds down to 2 periods; 1.1 years quarterly to 4
    let annual = BondInput::new(1000.0, 0.05, 990.0, 2.4, 1);
    let quarterly = BondInput::new(1000.0, 0.05, 990.0, 1.1, 4);
    let calculator = BondCalculator::new();

    assert_eq!(calculator.calculate(&annual, start()).unwrap().cash_flows.len(), 2);
    assert_eq!(calculator.calculate(&quarterly, start()).unwrap().cash_flows.len(), 4);
}

#[test]
fn short_term_has_one_period() {
    let bond = BondInput::new(1000.0, 0.05, 995.0, 0.1, 1);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    assert_eq!(result.cash_flows.len(), 1);
    assert_eq!(result.cash_flows[0].remaining_principal, 0.0);
    assert_eq!(result.cash_flows[0].payment_date, start());
}

// =============================================================================
// FALLBACK SCENARIOS
// =============================================================================

#[test]
fn unbracketed_yield_uses_approximation() {
    let bond = BondInput::new(1000.0, 0.0, 0.001, 1.0, 1);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    assert_relative_eq!(result.yield_to_maturity, 1.999_996, epsilon = 1e-6);
    assert_eq!(result.price_classification, PriceClassification::Discount);
}

#[test]
fn long_zero_coupon_uses_approximation() {
    let bond = BondInput::new(1000.0, 0.0, 500.0, 10.0, 12);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    assert_eq!(result.yield_to_maturity, 0.066_667);
    assert_eq!(result.current_yield, 0.0);
    assert_eq!(result.total_interest, 0.0);
    assert_eq!(result.cash_flows.len(), 120);
}

#[test]
fn short_zero_coupon_is_bisected() {
    let bond = BondInput::new(1000.0, 0.0, 500.0, 10.0, 1);
    let solved = YieldSolver::new().solve(&bond);

    assert_eq!(solved.method, SolveMethod::Bisection);
    // 2^(1/10) - 1
    assert_relative_eq!(solved.yield_value, 0.071_773_46, epsilon = 1e-6);
}

#[test]
fn extreme_price_gives_negative_approximation() {
    let bond = BondInput::new(100.0, 0.0, 1e9, 1.0, 1);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    assert!(result.yield_to_maturity < 0.0);
    assert_relative_eq!(result.yield_to_maturity, -2.0, epsilon = 1e-5);
    assert_eq!(result.price_classification, PriceClassification::Premium);
}

// =============================================================================
// PAYMENT DATES
// =============================================================================

#[test]
fn five_payments_a_year() {
    let bond = BondInput::new(1000.0, 0.05, 1000.0, 1.0, 5);
    let result = BondCalculator::new().calculate(&bond, start()).unwrap();

    let dates: Vec<String> = result
        .cash_flows
        .iter()
        .map(|cf| cf.payment_date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2025-01-15", "2025-03-27", "2025-06-09", "2025-08-21", "2025-11-03"]
    );
    assert_eq!(
        payment_date(start(), 6, 5).unwrap(),
        Date::from_ymd(2026, 1, 15).unwrap()
    );
}

#[test]
fn leap_day_start_clamps_each_year() {
    let bond = BondInput::new(1000.0, 0.05, 1000.0, 5.0, 1);
    let start = Date::from_ymd(2024, 2, 29).unwrap();
    let result = BondCalculator::new().calculate(&bond, start).unwrap();

    let dates: Vec<String> = result
        .cash_flows
        .iter()
        .map(|cf| cf.payment_date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2024-02-29", "2025-02-28", "2026-02-28", "2027-02-28", "2028-02-29"]
    );
}
