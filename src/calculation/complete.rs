//! Complete salary calculation.
//!
//! Dispatches an employee's pay scheme to its formula, pipes the gross figure
//! into the statutory charges and assembles a [`SalaryResult`] with an
//! audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::PayrollSettings;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, PayPeriodInput, SalaryBreakdown, SalaryResult,
    SalaryScheme, SalarySummary, StatutoryCharges,
};

use super::commission::{calculate_commission_salary, calculate_mixed_salary};
use super::hourly::calculate_hourly_salary;
use super::performance::calculate_performance_salary;
use super::proration::{calculate_fixed_salary, calculate_monthly_salary};
use super::statutory_charges::calculate_statutory_charges;

/// Computes the gross-pay breakdown for a pay scheme.
///
/// Each scheme reads only the subset of `input` it needs.
pub fn calculate_breakdown(
    scheme: &SalaryScheme,
    input: &PayPeriodInput,
    settings: &PayrollSettings,
) -> EngineResult<SalaryBreakdown> {
    let days_in_month = settings.proration.days_in_month;

    let breakdown = match scheme {
        SalaryScheme::Hourly { hourly_rate } => SalaryBreakdown::Hourly(calculate_hourly_salary(
            *hourly_rate,
            input.hours_worked,
            settings.overtime.threshold_hours,
            settings.overtime.multiplier,
        )?),
        SalaryScheme::Monthly { monthly_salary } => SalaryBreakdown::Monthly(
            calculate_monthly_salary(*monthly_salary, input.days_worked, days_in_month)?,
        ),
        SalaryScheme::Commission {
            base_salary,
            commission_rate,
        } => SalaryBreakdown::Commission(calculate_commission_salary(
            *base_salary,
            *commission_rate,
            input.sales_amount,
        )?),
        SalaryScheme::Performance { base_salary } => {
            SalaryBreakdown::Performance(calculate_performance_salary(
                *base_salary,
                input.performance_rate,
                input.performance_targets.clone(),
            )?)
        }
        SalaryScheme::Fixed { fixed_amount } => SalaryBreakdown::Fixed(calculate_fixed_salary(
            *fixed_amount,
            input.days_worked,
            days_in_month,
        )?),
        SalaryScheme::Mixed {
            base_salary,
            commission_rate,
            bonus_rate,
        } => SalaryBreakdown::Mixed(calculate_mixed_salary(
            *base_salary,
            *commission_rate,
            input.sales_amount,
            *bonus_rate,
        )?),
    };

    Ok(breakdown)
}

/// Calculates the complete salary of an employee for one pay period.
///
/// The scheme's gross figure is always passed through the statutory charges
/// configured in `settings`.
///
/// # Errors
///
/// Returns `InvalidArgument` if any input or configured rate is out of range.
///
/// # Examples
///
/// ```
/// use timetrack_engine::calculation::calculate_complete_salary;
/// use timetrack_engine::config::PayrollSettings;
/// use timetrack_engine::models::{Employee, PayPeriodInput, Role, SalaryScheme};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_007".to_string(),
///     name: "Kofi Mensah".to_string(),
///     role: Role::Employee,
///     scheme: SalaryScheme::Commission {
///         base_salary: Decimal::from(1000),
///         commission_rate: Decimal::new(1, 1),
///     },
/// };
///
/// let result = calculate_complete_salary(
///     &employee,
///     &PayPeriodInput::sales(Decimal::from(5000)),
///     &PayrollSettings::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.summary.gross_salary, Decimal::from(1500));
/// assert_eq!(result.summary.net_salary, Decimal::from(1155));
/// assert_eq!(result.summary.total_cost, Decimal::from(2175));
/// ```
pub fn calculate_complete_salary(
    employee: &Employee,
    input: &PayPeriodInput,
    settings: &PayrollSettings,
) -> EngineResult<SalaryResult> {
    let start_time = Instant::now();

    let breakdown = calculate_breakdown(&employee.scheme, input, settings)?;
    let gross_salary = breakdown.gross_pay();

    let charges = calculate_statutory_charges(
        gross_salary,
        settings.statutory.employee_rate,
        settings.statutory.employer_rate,
    )?;

    let steps = vec![scheme_audit_step(&breakdown, 1), charges_audit_step(&charges, 2)];
    let warnings = fraction_warnings(&employee.scheme, input);
    let summary = SalarySummary::from(&charges);

    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        employee_id = %employee.id,
        salary_type = %employee.salary_type(),
        gross_salary = %summary.gross_salary,
        warnings = warnings.len(),
        duration_us,
        "Salary calculated"
    );

    Ok(SalaryResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        salary_type: employee.salary_type(),
        breakdown,
        charges,
        summary,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn scheme_audit_step(breakdown: &SalaryBreakdown, step_number: u32) -> AuditStep {
    let salary_type = breakdown.salary_type();

    let (input, output, reasoning) = match breakdown {
        SalaryBreakdown::Hourly(p) => (
            serde_json::json!({
                "hours_worked": p.hours_worked.normalize().to_string(),
            }),
            serde_json::json!({
                "regular_hours": p.regular_hours.normalize().to_string(),
                "overtime_hours": p.overtime_hours.normalize().to_string(),
                "regular_pay": p.regular_pay.normalize().to_string(),
                "overtime_pay": p.overtime_pay.normalize().to_string(),
                "total_pay": p.total_pay.normalize().to_string(),
            }),
            format!(
                "{}h regular = {}, {}h overtime = {}, total {}",
                p.regular_hours.normalize(),
                p.regular_pay.normalize(),
                p.overtime_hours.normalize(),
                p.overtime_pay.normalize(),
                p.total_pay.normalize()
            ),
        ),
        SalaryBreakdown::Monthly(p) | SalaryBreakdown::Fixed(p) => (
            serde_json::json!({
                "full_amount": p.full_amount.normalize().to_string(),
                "days_worked": p.days_worked.normalize().to_string(),
                "total_days_in_month": p.total_days_in_month.normalize().to_string(),
            }),
            serde_json::json!({
                "daily_rate": p.daily_rate.normalize().to_string(),
                "actual_pay": p.actual_pay.normalize().to_string(),
            }),
            format!(
                "{} / {} days x {} = {}",
                p.days_worked.normalize(),
                p.total_days_in_month.normalize(),
                p.full_amount.normalize(),
                p.actual_pay.normalize()
            ),
        ),
        SalaryBreakdown::Commission(p) => (
            serde_json::json!({
                "base_salary": p.base_salary.normalize().to_string(),
                "sales_amount": p.sales_amount.normalize().to_string(),
                "commission_rate": p.commission_rate.normalize().to_string(),
            }),
            serde_json::json!({
                "commission": p.commission.normalize().to_string(),
                "total_pay": p.total_pay.normalize().to_string(),
            }),
            format!(
                "{} + {} x {} = {}",
                p.base_salary.normalize(),
                p.sales_amount.normalize(),
                p.commission_rate.normalize(),
                p.total_pay.normalize()
            ),
        ),
        SalaryBreakdown::Performance(p) => (
            serde_json::json!({
                "base_salary": p.base_salary.normalize().to_string(),
                "performance_rate": p.performance_rate.normalize().to_string(),
            }),
            serde_json::json!({
                "performance_bonus": p.performance_bonus.normalize().to_string(),
                "total_pay": p.total_pay.normalize().to_string(),
            }),
            format!(
                "{} + {} x {} = {}",
                p.base_salary.normalize(),
                p.base_salary.normalize(),
                p.performance_rate.normalize(),
                p.total_pay.normalize()
            ),
        ),
        SalaryBreakdown::Mixed(p) => (
            serde_json::json!({
                "base_salary": p.base_salary.normalize().to_string(),
                "sales_amount": p.sales_amount.normalize().to_string(),
                "commission_rate": p.commission_rate.normalize().to_string(),
                "bonus_rate": p.bonus_rate.normalize().to_string(),
            }),
            serde_json::json!({
                "commission": p.commission.normalize().to_string(),
                "bonus": p.bonus.normalize().to_string(),
                "total_pay": p.total_pay.normalize().to_string(),
            }),
            format!(
                "{} + {} commission + {} bonus = {}",
                p.base_salary.normalize(),
                p.commission.normalize(),
                p.bonus.normalize(),
                p.total_pay.normalize()
            ),
        ),
    };

    AuditStep {
        step_number,
        rule_id: format!("{}_pay", salary_type),
        rule_name: salary_type.label().to_string(),
        input,
        output,
        reasoning,
    }
}

fn charges_audit_step(charges: &StatutoryCharges, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "statutory_charges".to_string(),
        rule_name: "Statutory Charges".to_string(),
        input: serde_json::json!({
            "gross_salary": charges.gross_salary.normalize().to_string(),
            "employee_rate": charges.employee_rate.normalize().to_string(),
            "employer_rate": charges.employer_rate.normalize().to_string(),
        }),
        output: serde_json::json!({
            "employee_charges": charges.employee_charges.normalize().to_string(),
            "employer_charges": charges.employer_charges.normalize().to_string(),
            "net_salary": charges.net_salary.normalize().to_string(),
            "total_cost": charges.total_cost.normalize().to_string(),
        }),
        reasoning: format!(
            "net = {} - {}; total cost = {} + {}",
            charges.gross_salary.normalize(),
            charges.employee_charges.normalize(),
            charges.gross_salary.normalize(),
            charges.employer_charges.normalize()
        ),
    }
}

/// Flags rates documented as fractions (0-1) that exceed one.
fn fraction_warnings(scheme: &SalaryScheme, input: &PayPeriodInput) -> Vec<AuditWarning> {
    let mut rates: Vec<(&str, Decimal)> = Vec::new();
    match scheme {
        SalaryScheme::Commission {
            commission_rate, ..
        } => rates.push(("commission_rate", *commission_rate)),
        SalaryScheme::Performance { .. } => rates.push(("performance_rate", input.performance_rate)),
        SalaryScheme::Mixed {
            commission_rate,
            bonus_rate,
            ..
        } => {
            rates.push(("commission_rate", *commission_rate));
            rates.push(("bonus_rate", *bonus_rate));
        }
        SalaryScheme::Hourly { .. } | SalaryScheme::Monthly { .. } | SalaryScheme::Fixed { .. } => {}
    }

    rates
        .into_iter()
        .filter(|(_, rate)| *rate > Decimal::ONE)
        .map(|(name, rate)| AuditWarning {
            code: "RATE_ABOVE_ONE".to_string(),
            message: format!(
                "{} is {} but is expected to be a fraction between 0 and 1",
                name,
                rate.normalize()
            ),
            severity: "medium".to_string(),
        })
        .collect()
}
