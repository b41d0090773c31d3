//! Performance salary calculation.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::PerformancePay;

use super::validation::{checked, ensure_non_negative};

/// Calculates a base salary plus a bonus proportional to performance.
///
/// `targets` is opaque metadata; it is carried into the breakdown and not
/// interpreted.
///
/// # Examples
///
/// ```
/// use timetrack_engine::calculation::calculate_performance_salary;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_performance_salary(Decimal::from(2000), Decimal::new(8, 1), None).unwrap();
/// assert_eq!(pay.performance_bonus, Decimal::from(1600));
/// assert_eq!(pay.total_pay, Decimal::from(3600));
/// ```
pub fn calculate_performance_salary(
    base_salary: Decimal,
    performance_rate: Decimal,
    targets: Option<serde_json::Value>,
) -> EngineResult<PerformancePay> {
    ensure_non_negative("base_salary", base_salary)?;
    ensure_non_negative("performance_rate", performance_rate)?;

    let performance_bonus = checked(
        "performance_bonus",
        base_salary.checked_mul(performance_rate),
    )?;
    let total_pay = checked("total_pay", base_salary.checked_add(performance_bonus))?;

    Ok(PerformancePay {
        base_salary,
        performance_rate,
        performance_bonus,
        total_pay,
        targets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_performance_pays_base() {
        let pay = calculate_performance_salary(dec("1500"), Decimal::ZERO, None).unwrap();
        assert_eq!(pay.performance_bonus, Decimal::ZERO);
        assert_eq!(pay.total_pay, dec("1500"));
    }

    #[test]
    fn test_full_performance_doubles_base() {
        let pay = calculate_performance_salary(dec("1500"), Decimal::ONE, None).unwrap();
        assert_eq!(pay.total_pay, dec("3000"));
    }

    #[test]
    fn test_targets_pass_through() {
        let targets = serde_json::json!({"monthly_units": 400});
        let pay = calculate_performance_salary(dec("1000"), dec("0.25"), Some(targets.clone())).unwrap();
        assert_eq!(pay.targets, Some(targets));
        assert_eq!(pay.total_pay, dec("1250"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = calculate_performance_salary(dec("1000"), dec("-0.5"), None);
        assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
    }

    #[test]
    fn test_bonus_overflow_is_rejected() {
        match calculate_performance_salary(Decimal::MAX, Decimal::TWO, None) {
            Err(EngineError::InvalidArgument { name, .. }) => assert_eq!(name, "performance_bonus"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
