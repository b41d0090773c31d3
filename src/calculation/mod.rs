//! Salary calculation logic for the TimeTrack engine.
//!
//! This module contains one formula per pay scheme (hourly with overtime,
//! day-prorated monthly and fixed-rate, commission, performance and mixed),
//! the statutory-charge step applied to every gross figure, and the
//! complete calculation that dispatches on an employee's scheme.

mod commission;
mod complete;
mod hourly;
mod performance;
mod proration;
mod statutory_charges;
mod validation;

pub use commission::{calculate_commission_salary, calculate_mixed_salary};
pub use complete::{calculate_breakdown, calculate_complete_salary};
pub use hourly::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD_HOURS, calculate_hourly_salary,
};
pub use performance::calculate_performance_salary;
pub use proration::{DEFAULT_DAYS_IN_MONTH, calculate_fixed_salary, calculate_monthly_salary};
pub use statutory_charges::calculate_statutory_charges;
