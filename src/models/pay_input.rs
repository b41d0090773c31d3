//! Pay period input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The worked quantities for one pay period.
///
/// Each scheme reads only the fields it needs; the rest are ignored.
/// All fields default to zero.
///
/// # Example
///
/// ```
/// use timetrack_engine::models::PayPeriodInput;
/// use rust_decimal::Decimal;
///
/// let input: PayPeriodInput = serde_json::from_str(r#"{"hours_worked": "42"}"#).unwrap();
/// assert_eq!(input.hours_worked, Decimal::from(42));
/// assert_eq!(input.days_worked, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayPeriodInput {
    /// Total hours worked in the period (hourly scheme).
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Days worked in the period (monthly and fixed schemes).
    #[serde(default)]
    pub days_worked: Decimal,
    /// Sales booked in the period (commission and mixed schemes).
    #[serde(default)]
    pub sales_amount: Decimal,
    /// Performance achieved as a fraction 0-1 (performance scheme).
    #[serde(default)]
    pub performance_rate: Decimal,
    /// Opaque targets metadata carried into the performance breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_targets: Option<serde_json::Value>,
}

impl PayPeriodInput {
    /// Creates an input with only hours worked set.
    pub fn hours(hours_worked: Decimal) -> Self {
        Self {
            hours_worked,
            ..Default::default()
        }
    }

    /// Creates an input with only days worked set.
    pub fn days(days_worked: Decimal) -> Self {
        Self {
            days_worked,
            ..Default::default()
        }
    }

    /// Creates an input with only sales set.
    pub fn sales(sales_amount: Decimal) -> Self {
        Self {
            sales_amount,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_zeroes() {
        let input: PayPeriodInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, PayPeriodInput::default());
    }

    #[test]
    fn test_targets_are_kept_opaque() {
        let json = r#"{"performance_rate": "0.8", "performance_targets": {"calls": 120}}"#;
        let input: PayPeriodInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.performance_rate, Decimal::new(8, 1));
        assert_eq!(input.performance_targets.unwrap()["calls"], 120);
    }

    #[test]
    fn test_constructors_set_single_field() {
        assert_eq!(PayPeriodInput::hours(Decimal::from(40)).hours_worked, Decimal::from(40));
        assert_eq!(PayPeriodInput::days(Decimal::from(11)).days_worked, Decimal::from(11));
        assert_eq!(PayPeriodInput::sales(Decimal::from(5000)).sales_amount, Decimal::from(5000));
    }

    #[test]
    fn test_absent_targets_are_not_serialized() {
        let json = serde_json::to_string(&PayPeriodInput::default()).unwrap();
        assert!(!json.contains("performance_targets"));
    }
}
