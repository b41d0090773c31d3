//! Core data models for the TimeTrack engine.
//!
//! This module contains all the domain models used throughout the engine.

mod currency;
mod employee;
mod pay_input;
mod salary_result;

pub use currency::{Currency, format_amount};
pub use employee::{Employee, EmployeeRecord, Role, SalaryScheme, SalaryType};
pub use pay_input::PayPeriodInput;
pub use salary_result::{
    AuditStep, AuditTrace, AuditWarning, CommissionPay, HourlyPay, MixedPay, PerformancePay,
    ProratedPay, SalaryBreakdown, SalaryResult, SalarySummary, StatutoryCharges,
};
