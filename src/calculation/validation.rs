//! Argument checks shared by the salary formulas.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Fails with `InvalidArgument` when `value` is negative.
pub(crate) fn ensure_non_negative(name: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_argument(
            name,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(value)
}

/// Fails with `InvalidArgument` unless `value` is strictly positive.
pub(crate) fn ensure_positive(name: &str, value: Decimal) -> EngineResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            name,
            format!("must be greater than zero (got {})", value),
        ));
    }
    Ok(value)
}

/// Unwraps the result of a checked `Decimal` operation, failing with
/// `InvalidArgument` on overflow.
pub(crate) fn checked(name: &str, value: Option<Decimal>) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::invalid_argument(name, "amount out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero_and_positive() {
        assert!(ensure_non_negative("x", Decimal::ZERO).is_ok());
        assert!(ensure_non_negative("x", Decimal::ONE).is_ok());
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        match ensure_non_negative("hours_worked", Decimal::NEGATIVE_ONE) {
            Err(EngineError::InvalidArgument { name, .. }) => assert_eq!(name, "hours_worked"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let negative_zero = Decimal::new(0, 2) * Decimal::NEGATIVE_ONE;
        assert!(ensure_non_negative("x", negative_zero).is_ok());
    }

    #[test]
    fn test_positive_rejects_zero() {
        assert!(ensure_positive("total_days_in_month", Decimal::ZERO).is_err());
        assert!(ensure_positive("total_days_in_month", Decimal::from(22)).is_ok());
    }

    #[test]
    fn test_checked_overflow_names_argument() {
        assert_eq!(checked("x", Decimal::ONE.checked_add(Decimal::ONE)).unwrap(), Decimal::TWO);

        match checked("regular_pay", Decimal::MAX.checked_mul(Decimal::TWO)) {
            Err(EngineError::InvalidArgument { name, message }) => {
                assert_eq!(name, "regular_pay");
                assert_eq!(message, "amount out of range");
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
