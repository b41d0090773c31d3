//! Day-based proration for monthly and fixed-rate salaries.
//!
//! Both schemes pay `(days_worked / total_days_in_month) * full_amount`.
//! No rounding is applied here; callers format amounts for display.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::ProratedPay;

use super::validation::{checked, ensure_non_negative, ensure_positive};

/// Default number of working days in a month.
pub const DEFAULT_DAYS_IN_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

fn prorate(
    amount_name: &str,
    full_amount: Decimal,
    days_worked: Decimal,
    total_days_in_month: Decimal,
) -> EngineResult<ProratedPay> {
    ensure_non_negative(amount_name, full_amount)?;
    ensure_non_negative("days_worked", days_worked)?;
    ensure_positive("total_days_in_month", total_days_in_month)?;

    let daily_rate = checked("daily_rate", full_amount.checked_div(total_days_in_month))?;
    let actual_pay = checked(
        "actual_pay",
        days_worked
            .checked_div(total_days_in_month)
            .and_then(|fraction| fraction.checked_mul(full_amount)),
    )?;

    Ok(ProratedPay {
        full_amount,
        days_worked,
        total_days_in_month,
        daily_rate,
        actual_pay,
    })
}

/// Calculates a monthly salary prorated by days worked.
///
/// # Errors
///
/// Returns `InvalidArgument` if `total_days_in_month` is not positive or
/// the salary or days are negative.
///
/// # Examples
///
/// ```
/// use timetrack_engine::calculation::{calculate_monthly_salary, DEFAULT_DAYS_IN_MONTH};
/// use rust_decimal::Decimal;
///
/// let full = calculate_monthly_salary(Decimal::from(3000), Decimal::from(22), DEFAULT_DAYS_IN_MONTH).unwrap();
/// assert_eq!(full.actual_pay, Decimal::from(3000));
///
/// let half = calculate_monthly_salary(Decimal::from(3000), Decimal::from(11), DEFAULT_DAYS_IN_MONTH).unwrap();
/// assert_eq!(half.actual_pay, Decimal::from(1500));
/// ```
pub fn calculate_monthly_salary(
    monthly_salary: Decimal,
    days_worked: Decimal,
    total_days_in_month: Decimal,
) -> EngineResult<ProratedPay> {
    prorate("monthly_salary", monthly_salary, days_worked, total_days_in_month)
}

/// Calculates a fixed-rate salary prorated by days worked.
///
/// Same law as [`calculate_monthly_salary`], applied to a flat amount.
pub fn calculate_fixed_salary(
    fixed_amount: Decimal,
    days_worked: Decimal,
    total_days_in_month: Decimal,
) -> EngineResult<ProratedPay> {
    prorate("fixed_amount", fixed_amount, days_worked, total_days_in_month)
}
