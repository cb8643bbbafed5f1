//! Per-period schedule for a bullet bond.

use yieldcalc_core::error::{CoreError, CoreResult};
use yieldcalc_core::types::{BondInput, CashFlowEntry, Date};

use crate::periods::{coupon_per_period, number_of_periods};

const MONTHS_PER_YEAR: u64 = 12;

/// Payment date of period `period_number` (1-based).
///
/// The date is `start_date + (period_number - 1) * 12 / frequency` months,
/// always measured from `start_date` so month-end clamping does not accumulate
/// (a monthly schedule from Jan 31 runs Feb 28, Mar 31, Apr 30).
///
/// When `12 / frequency` is not a whole number of months the offset is split
/// into whole months plus a fraction. Whole months are added first; the
/// fraction is then converted to days against the length of the month reached
/// and rounded to the nearest day (halves away from zero).
///
/// ```rust
/// use yieldcalc_bonds::cashflows::payment_date;
/// use yieldcalc_core::types::Date;
///
/// let start = Date::from_ymd(2025, 1, 15).unwrap();
/// // 2.4 months: Mar 15 plus 0.4 * 31 days
/// assert_eq!(payment_date(start, 2, 5).unwrap().to_string(), "2025-03-27");
/// ```
pub fn payment_date(start_date: Date, period_number: u32, frequency: u32) -> CoreResult<Date> {
    let offset = u64::from(period_number.saturating_sub(1)) * MONTHS_PER_YEAR;
    let frequency = u64::from(frequency);

    let whole_months = u32::try_from(offset / frequency).map_err(|_| {
        CoreError::invalid_date(format!(
            "period {period_number} is too far from {start_date}"
        ))
    })?;
    let remainder = offset % frequency;

    let date = start_date.add_months(whole_months)?;
    if remainder == 0 {
        return Ok(date);
    }

    let days = ((remainder * u64::from(date.days_in_month())) as f64 / frequency as f64).round();
    date.add_days(days as i64)
}

/// Generates the cash-flow schedule for a bond.
///
/// Produces exactly [`number_of_periods`] entries. Every entry pays the same
/// coupon; principal stays at face value until the final period, where it is
/// repaid and `remaining_principal` becomes zero.
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` only if a payment date falls outside the
/// representable calendar.
pub fn generate_schedule(input: &BondInput, start_date: Date) -> CoreResult<Vec<CashFlowEntry>> {
    let periods = number_of_periods(input.years_to_maturity, input.frequency);
    let coupon = coupon_per_period(input.face_value, input.coupon_rate, input.frequency);

    let mut schedule = Vec::with_capacity(periods as usize);
    let mut cumulative_interest = 0.0;

    for period in 1..=periods {
        cumulative_interest += coupon;

        let remaining_principal = if period == periods {
            0.0
        } else {
            input.face_value
        };

        schedule.push(CashFlowEntry {
            period_number: period,
            payment_date: payment_date(start_date, period, input.frequency)?,
            coupon_payment: coupon,
            cumulative_interest,
            remaining_principal,
        });
    }

    Ok(schedule)
}
