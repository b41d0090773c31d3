//! Hourly salary calculation.
//!
//! Splits the hours of a single period at an overtime threshold and pays
//! the hours above it at a multiplied rate.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::HourlyPay;

use super::validation::{checked, ensure_non_negative, ensure_positive};

/// Default number of hours in a period before overtime applies.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Default overtime multiplier (150% of the hourly rate).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates an hourly salary with overtime.
///
/// `hours_worked` is the total for a single period; no weekly boundaries
/// are tracked inside it.
///
/// # Arguments
///
/// * `hourly_rate` - Pay per regular hour
/// * `hours_worked` - Hours worked in the period
/// * `overtime_threshold` - Hours paid at the regular rate before overtime applies
/// * `overtime_multiplier` - Factor applied to the rate for overtime hours
///
/// # Errors
///
/// Returns `InvalidArgument` when the rate, hours or multiplier are negative,
/// the threshold is not positive, or the pay does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use timetrack_engine::calculation::{
///     calculate_hourly_salary, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD_HOURS,
/// };
/// use rust_decimal::Decimal;
///
/// let pay = calculate_hourly_salary(
///     Decimal::from(10),
///     Decimal::from(45),
///     DEFAULT_OVERTIME_THRESHOLD_HOURS,
///     DEFAULT_OVERTIME_MULTIPLIER,
/// )
/// .unwrap();
///
/// assert_eq!(pay.regular_pay, Decimal::from(400));
/// assert_eq!(pay.overtime_pay, Decimal::from(75));
/// assert_eq!(pay.total_pay, Decimal::from(475));
/// ```
pub fn calculate_hourly_salary(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    overtime_threshold: Decimal,
    overtime_multiplier: Decimal,
) -> EngineResult<HourlyPay> {
    ensure_non_negative("hourly_rate", hourly_rate)?;
    ensure_non_negative("hours_worked", hours_worked)?;
    ensure_positive("overtime_threshold", overtime_threshold)?;
    ensure_non_negative("overtime_multiplier", overtime_multiplier)?;

    let regular_hours = hours_worked.min(overtime_threshold);
    let overtime_hours = (hours_worked - overtime_threshold).max(Decimal::ZERO);

    let regular_pay = checked("regular_pay", regular_hours.checked_mul(hourly_rate))?;
    let overtime_pay = checked(
        "overtime_pay",
        overtime_hours
            .checked_mul(hourly_rate)
            .and_then(|pay| pay.checked_mul(overtime_multiplier)),
    )?;
    let total_pay = checked("total_pay", regular_pay.checked_add(overtime_pay))?;

    Ok(HourlyPay {
        hours_worked,
        regular_hours,
        overtime_hours,
        regular_pay,
        overtime_pay,
        total_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hourly(rate: &str, hours: &str) -> HourlyPay {
        calculate_hourly_salary(
            dec(rate),
            dec(hours),
            DEFAULT_OVERTIME_THRESHOLD_HOURS,
            DEFAULT_OVERTIME_MULTIPLIER,
        )
        .unwrap()
    }

    /// HR-001: under threshold, no overtime
    #[test]
    fn test_hr_001_under_threshold_has_no_overtime() {
        let pay = hourly("25.50", "32");

        assert_eq!(pay.regular_hours, dec("32"));
        assert_eq!(pay.overtime_hours, Decimal::ZERO);
        assert_eq!(pay.regular_pay, dec("816.00"));
        assert_eq!(pay.overtime_pay, Decimal::ZERO);
        assert_eq!(pay.total_pay, dec("816.00"));
    }

    /// HR-002: exactly at threshold
    #[test]
    fn test_hr_002_exactly_40_hours_has_no_overtime() {
        let pay = hourly("20", "40");

        assert_eq!(pay.regular_hours, dec("40"));
        assert_eq!(pay.overtime_hours, Decimal::ZERO);
        assert_eq!(pay.total_pay, dec("800"));
    }

    /// HR-003: above threshold pays 1.5x
    #[test]
    fn test_hr_003_overtime_paid_at_one_and_a_half() {
        let pay = hourly("20", "42.5");

        assert_eq!(pay.regular_hours, dec("40"));
        assert_eq!(pay.overtime_hours, dec("2.5"));
        assert_eq!(pay.regular_pay, dec("800"));
        assert_eq!(pay.overtime_pay, dec("75.0"));
        assert_eq!(pay.total_pay, dec("875.0"));
        assert_eq!(pay.hours_worked, dec("42.5"));
    }

    #[test]
    fn test_custom_threshold_and_multiplier() {
        let pay = calculate_hourly_salary(dec("10"), dec("40"), dec("35"), dec("2")).unwrap();

        assert_eq!(pay.regular_hours, dec("35"));
        assert_eq!(pay.overtime_hours, dec("5"));
        assert_eq!(pay.overtime_pay, dec("100"));
        assert_eq!(pay.total_pay, dec("450"));
    }

    #[test]
    fn test_zero_hours_pays_nothing() {
        let pay = hourly("18", "0");
        assert_eq!(pay.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_negative_hours_rejected() {
        let result = calculate_hourly_salary(
            dec("18"),
            dec("-1"),
            DEFAULT_OVERTIME_THRESHOLD_HOURS,
            DEFAULT_OVERTIME_MULTIPLIER,
        );
        assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = calculate_hourly_salary(dec("18"), dec("10"), Decimal::ZERO, dec("1.5"));
        assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_OVERTIME_THRESHOLD_HOURS, dec("40"));
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, dec("1.5"));
    }

    proptest! {
        #[test]
        fn prop_no_overtime_at_or_below_threshold(tenths in 0i64..=400, rate_cents in 0i64..100_000) {
            let hours = Decimal::new(tenths, 1);
            let rate = Decimal::new(rate_cents, 2);
            let pay = calculate_hourly_salary(
                rate,
                hours,
                DEFAULT_OVERTIME_THRESHOLD_HOURS,
                DEFAULT_OVERTIME_MULTIPLIER,
            )
            .unwrap();

            prop_assert_eq!(pay.overtime_pay, Decimal::ZERO);
            prop_assert_eq!(pay.regular_pay, hours * rate);
        }

        #[test]
        fn prop_overtime_above_threshold(tenths in 401i64..2000, rate_cents in 0i64..100_000) {
            let hours = Decimal::new(tenths, 1);
            let rate = Decimal::new(rate_cents, 2);
            let pay = calculate_hourly_salary(
                rate,
                hours,
                DEFAULT_OVERTIME_THRESHOLD_HOURS,
                DEFAULT_OVERTIME_MULTIPLIER,
            )
            .unwrap();

            prop_assert_eq!(pay.overtime_pay, (hours - Decimal::from(40)) * rate * Decimal::new(15, 1));
            prop_assert_eq!(pay.total_pay, pay.regular_pay + pay.overtime_pay);
        }
    }

    #[test]
    fn test_overflowing_pay_is_rejected() {
        let result = calculate_hourly_salary(
            dec("1000000000000000"),
            dec("1000000000000000"),
            DEFAULT_OVERTIME_THRESHOLD_HOURS,
            DEFAULT_OVERTIME_MULTIPLIER,
        );
        match result {
            Err(EngineError::InvalidArgument { name, .. }) => assert_eq!(name, "overtime_pay"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
