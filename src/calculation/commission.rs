//! Commission-based salaries.
//!
//! Covers the plain commission scheme (base plus a share of sales) and the
//! mixed scheme, which adds a bonus on the base salary.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{CommissionPay, MixedPay};

use super::validation::{checked, ensure_non_negative};

/// Calculates a base salary plus commission on sales.
///
/// # Examples
///
/// ```
/// use timetrack_engine::calculation::calculate_commission_salary;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_commission_salary(Decimal::from(1000), Decimal::new(1, 1), Decimal::from(5000)).unwrap();
/// assert_eq!(pay.commission, Decimal::from(500));
/// assert_eq!(pay.total_pay, Decimal::from(1500));
/// ```
pub fn calculate_commission_salary(
    base_salary: Decimal,
    commission_rate: Decimal,
    sales_amount: Decimal,
) -> EngineResult<CommissionPay> {
    ensure_non_negative("base_salary", base_salary)?;
    ensure_non_negative("commission_rate", commission_rate)?;
    ensure_non_negative("sales_amount", sales_amount)?;

    let commission = checked("commission", sales_amount.checked_mul(commission_rate))?;
    let total_pay = checked("total_pay", base_salary.checked_add(commission))?;

    Ok(CommissionPay {
        base_salary,
        sales_amount,
        commission_rate,
        commission,
        total_pay,
    })
}

/// Calculates a base salary plus commission plus a bonus on the base.
///
/// `bonus_rate` is a fraction of the base salary; pass zero for no bonus.
///
/// # Examples
///
/// ```
/// use timetrack_engine::calculation::calculate_mixed_salary;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_mixed_salary(
///     Decimal::from(1000),
///     Decimal::new(5, 2),
///     Decimal::from(4000),
///     Decimal::new(1, 1),
/// )
/// .unwrap();
/// assert_eq!(pay.commission, Decimal::from(200));
/// assert_eq!(pay.bonus, Decimal::from(100));
/// assert_eq!(pay.total_pay, Decimal::from(1300));
/// ```
pub fn calculate_mixed_salary(
    base_salary: Decimal,
    commission_rate: Decimal,
    sales_amount: Decimal,
    bonus_rate: Decimal,
) -> EngineResult<MixedPay> {
    ensure_non_negative("base_salary", base_salary)?;
    ensure_non_negative("commission_rate", commission_rate)?;
    ensure_non_negative("sales_amount", sales_amount)?;
    ensure_non_negative("bonus_rate", bonus_rate)?;

    let commission = checked("commission", sales_amount.checked_mul(commission_rate))?;
    let bonus = checked("bonus", base_salary.checked_mul(bonus_rate))?;
    let total_pay = checked(
        "total_pay",
        base_salary
            .checked_add(commission)
            .and_then(|pay| pay.checked_add(bonus)),
    )?;

    Ok(MixedPay {
        base_salary,
        sales_amount,
        commission_rate,
        commission,
        bonus_rate,
        bonus,
        total_pay,
    })
}
