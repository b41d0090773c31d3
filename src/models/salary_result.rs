//! Salary result models for the TimeTrack engine.
//!
//! This module contains the [`SalaryResult`] type and its associated structures
//! that capture all outputs from a salary calculation: the per-scheme breakdown,
//! the statutory charges, the summary and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryType;

/// Breakdown of an hourly salary.
///
/// # Example
///
/// ```
/// use timetrack_engine::models::HourlyPay;
/// use rust_decimal::Decimal;
///
/// let pay = HourlyPay {
///     hours_worked: Decimal::from(42),
///     regular_hours: Decimal::from(40),
///     overtime_hours: Decimal::from(2),
///     regular_pay: Decimal::from(400),
///     overtime_pay: Decimal::from(30),
///     total_pay: Decimal::from(430),
/// };
/// assert_eq!(pay.regular_pay + pay.overtime_pay, pay.total_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPay {
    /// Hours worked in the period.
    pub hours_worked: Decimal,
    /// Hours up to the overtime threshold.
    pub regular_hours: Decimal,
    /// Hours above the overtime threshold.
    pub overtime_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Regular plus overtime pay.
    pub total_pay: Decimal,
}

/// Breakdown of a salary prorated by days worked (monthly and fixed schemes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProratedPay {
    /// The full-month amount being prorated.
    pub full_amount: Decimal,
    /// Days worked in the period.
    pub days_worked: Decimal,
    /// Days in a full month.
    pub total_days_in_month: Decimal,
    /// Pay for one day.
    pub daily_rate: Decimal,
    /// Prorated pay for the period.
    pub actual_pay: Decimal,
}

/// Breakdown of a commission salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionPay {
    /// Guaranteed base salary.
    pub base_salary: Decimal,
    /// Sales booked in the period.
    pub sales_amount: Decimal,
    /// Commission as a fraction of sales.
    pub commission_rate: Decimal,
    /// Commission earned.
    pub commission: Decimal,
    /// Base plus commission.
    pub total_pay: Decimal,
}

/// Breakdown of a performance salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePay {
    /// Guaranteed base salary.
    pub base_salary: Decimal,
    /// Performance achieved as a fraction.
    pub performance_rate: Decimal,
    /// Bonus earned.
    pub performance_bonus: Decimal,
    /// Base plus bonus.
    pub total_pay: Decimal,
    /// Targets metadata, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<serde_json::Value>,
}

/// Breakdown of a mixed salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedPay {
    /// Guaranteed base salary.
    pub base_salary: Decimal,
    /// Sales booked in the period.
    pub sales_amount: Decimal,
    /// Commission as a fraction of sales.
    pub commission_rate: Decimal,
    /// Commission earned.
    pub commission: Decimal,
    /// Bonus as a fraction of the base salary.
    pub bonus_rate: Decimal,
    /// Bonus earned.
    pub bonus: Decimal,
    /// Base plus commission plus bonus.
    pub total_pay: Decimal,
}

/// The gross-pay breakdown produced by one pay scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "salary_type", rename_all = "snake_case")]
pub enum SalaryBreakdown {
    /// Hourly scheme.
    Hourly(HourlyPay),
    /// Monthly scheme.
    Monthly(ProratedPay),
    /// Commission scheme.
    Commission(CommissionPay),
    /// Performance scheme.
    Performance(PerformancePay),
    /// Fixed-rate scheme.
    Fixed(ProratedPay),
    /// Mixed scheme.
    Mixed(MixedPay),
}

impl SalaryBreakdown {
    /// Returns the gross figure: `total_pay`, or `actual_pay` for prorated schemes.
    pub fn gross_pay(&self) -> Decimal {
        match self {
            SalaryBreakdown::Hourly(p) => p.total_pay,
            SalaryBreakdown::Monthly(p) | SalaryBreakdown::Fixed(p) => p.actual_pay,
            SalaryBreakdown::Commission(p) => p.total_pay,
            SalaryBreakdown::Performance(p) => p.total_pay,
            SalaryBreakdown::Mixed(p) => p.total_pay,
        }
    }

    /// Returns the salary type that produced this breakdown.
    pub fn salary_type(&self) -> SalaryType {
        match self {
            SalaryBreakdown::Hourly(_) => SalaryType::Hourly,
            SalaryBreakdown::Monthly(_) => SalaryType::Monthly,
            SalaryBreakdown::Commission(_) => SalaryType::Commission,
            SalaryBreakdown::Performance(_) => SalaryType::Performance,
            SalaryBreakdown::Fixed(_) => SalaryType::Fixed,
            SalaryBreakdown::Mixed(_) => SalaryType::Mixed,
        }
    }
}

/// Statutory charges applied to a gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryCharges {
    /// The gross salary the charges are based on.
    pub gross_salary: Decimal,
    /// Employee-side rate.
    pub employee_rate: Decimal,
    /// Employer-side rate.
    pub employer_rate: Decimal,
    /// Charges withheld from the employee.
    pub employee_charges: Decimal,
    /// Charges paid by the employer.
    pub employer_charges: Decimal,
    /// Gross salary minus employee charges.
    pub net_salary: Decimal,
    /// Gross salary plus employer charges.
    pub total_cost: Decimal,
}

/// The headline figures of a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Total pay before statutory deductions.
    pub gross_salary: Decimal,
    /// Pay after employee-side charges.
    pub net_salary: Decimal,
    /// What the employer spends in total.
    pub total_cost: Decimal,
}

impl From<&StatutoryCharges> for SalarySummary {
    fn from(charges: &StatutoryCharges) -> Self {
        SalarySummary {
            gross_salary: charges.gross_salary,
            net_salary: charges.net_salary,
            total_cost: charges.total_cost,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary calculation.
///
/// Results are computed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The pay scheme that was applied.
    pub salary_type: SalaryType,
    /// Gross-pay breakdown for the scheme.
    pub breakdown: SalaryBreakdown,
    /// Statutory charges on the gross figure.
    pub charges: StatutoryCharges,
    /// Gross, net and total cost.
    pub summary: SalarySummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
