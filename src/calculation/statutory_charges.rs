//! Statutory charges on a gross salary.
//!
//! Employee-side charges are withheld from the gross salary to give the net
//! salary; employer-side charges are added on top to give the total cost.
//! The rates always come from configuration.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::StatutoryCharges;

use super::validation::{checked, ensure_non_negative};

/// Applies employee and employer charge rates to a gross salary.
///
/// # Errors
///
/// Returns `InvalidArgument` if the gross salary or either rate is negative.
///
/// # Examples
///
/// ```
/// use timetrack_engine::calculation::calculate_statutory_charges;
/// use rust_decimal::Decimal;
///
/// let charges = calculate_statutory_charges(
///     Decimal::from(1000),
///     Decimal::new(23, 2),
///     Decimal::new(45, 2),
/// )
/// .unwrap();
///
/// assert_eq!(charges.employee_charges, Decimal::from(230));
/// assert_eq!(charges.employer_charges, Decimal::from(450));
/// assert_eq!(charges.net_salary, Decimal::from(770));
/// assert_eq!(charges.total_cost, Decimal::from(1450));
/// ```
pub fn calculate_statutory_charges(
    gross_salary: Decimal,
    employee_rate: Decimal,
    employer_rate: Decimal,
) -> EngineResult<StatutoryCharges> {
    ensure_non_negative("gross_salary", gross_salary)?;
    ensure_non_negative("employee_rate", employee_rate)?;
    ensure_non_negative("employer_rate", employer_rate)?;

    let employee_charges = checked("employee_charges", gross_salary.checked_mul(employee_rate))?;
    let employer_charges = checked("employer_charges", gross_salary.checked_mul(employer_rate))?;
    let net_salary = checked("net_salary", gross_salary.checked_sub(employee_charges))?;
    let total_cost = checked("total_cost", gross_salary.checked_add(employer_charges))?;

    Ok(StatutoryCharges {
        gross_salary,
        employee_rate,
        employer_rate,
        employee_charges,
        employer_charges,
        net_salary,
        total_cost,
    })
}
