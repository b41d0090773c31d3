//! Configuration types for the TimeTrack engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::access::NetworkConfig;
use crate::calculation::{
    DEFAULT_DAYS_IN_MONTH, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD_HOURS,
};
use crate::models::{Currency, Employee};

/// Overtime rules for hourly employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeSettings {
    /// Hours in a period paid at the regular rate.
    pub threshold_hours: Decimal,
    /// Multiplier applied to the rate for hours above the threshold.
    pub multiplier: Decimal,
}

impl Default for OvertimeSettings {
    fn default() -> Self {
        Self {
            threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

/// Proration rules for monthly and fixed-rate employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProrationSettings {
    /// Working days in a full month.
    pub days_in_month: Decimal,
}

impl Default for ProrationSettings {
    fn default() -> Self {
        Self {
            days_in_month: DEFAULT_DAYS_IN_MONTH,
        }
    }
}

/// Statutory charge rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Fraction of the gross salary withheld from the employee.
    pub employee_rate: Decimal,
    /// Fraction of the gross salary paid on top by the employer.
    pub employer_rate: Decimal,
}

impl Default for StatutoryRates {
    /// French reference rates: 23% employee, 45% employer.
    fn default() -> Self {
        Self {
            employee_rate: Decimal::new(23, 2),
            employer_rate: Decimal::new(45, 2),
        }
    }
}

/// Payroll configuration from payroll.yaml.
///
/// Sections missing from the file fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Overtime rules.
    #[serde(default)]
    pub overtime: OvertimeSettings,
    /// Proration rules.
    #[serde(default)]
    pub proration: ProrationSettings,
    /// Statutory charge rates.
    #[serde(default)]
    pub statutory: StatutoryRates,
    /// Currency used to format amounts for display.
    #[serde(default)]
    pub currency: Currency,
}

/// Network configuration from network.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// The allow-list policy.
    #[serde(default)]
    pub policy: NetworkConfig,
    /// Address reported for clients when no other source knows theirs.
    #[serde(default)]
    pub fallback_client_ip: Option<String>,
}

/// Employee directory seed from employees.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeesConfig {
    /// The seeded employees.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Payroll settings.
    payroll: PayrollSettings,
    /// Network settings.
    network: NetworkSettings,
    /// Seeded employees.
    employees: Vec<Employee>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(payroll: PayrollSettings, network: NetworkSettings, employees: Vec<Employee>) -> Self {
        Self {
            payroll,
            network,
            employees,
        }
    }

    /// Returns the payroll settings.
    pub fn payroll(&self) -> &PayrollSettings {
        &self.payroll
    }

    /// Returns the network settings.
    pub fn network(&self) -> &NetworkSettings {
        &self.network
    }

    /// Returns the seeded employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
