//! Employee model and related types.
//!
//! This module defines the typed [`Employee`] with its [`SalaryScheme`], the
//! loose [`EmployeeRecord`] shape that external directories hand over, and
//! the [`Role`] used by access checks.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The six mutually exclusive pay schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Paid by the hour, with overtime above a weekly threshold.
    Hourly,
    /// Monthly salary prorated by days worked.
    Monthly,
    /// Base salary plus a commission on sales.
    Commission,
    /// Base salary plus a performance bonus.
    Performance,
    /// Flat amount prorated by days worked.
    Fixed,
    /// Base salary plus commission plus bonus.
    Mixed,
}

impl SalaryType {
    /// Every salary type, in display order.
    pub const ALL: [SalaryType; 6] = [
        SalaryType::Hourly,
        SalaryType::Monthly,
        SalaryType::Commission,
        SalaryType::Performance,
        SalaryType::Fixed,
        SalaryType::Mixed,
    ];

    /// Returns the wire name of the salary type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryType::Hourly => "hourly",
            SalaryType::Monthly => "monthly",
            SalaryType::Commission => "commission",
            SalaryType::Performance => "performance",
            SalaryType::Fixed => "fixed",
            SalaryType::Mixed => "mixed",
        }
    }

    /// Returns a short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SalaryType::Hourly => "Hourly salary",
            SalaryType::Monthly => "Monthly salary",
            SalaryType::Commission => "Commission salary",
            SalaryType::Performance => "Performance salary",
            SalaryType::Fixed => "Fixed-rate salary",
            SalaryType::Mixed => "Mixed salary",
        }
    }

    /// Returns a one-line description of how the scheme pays.
    pub fn description(&self) -> &'static str {
        match self {
            SalaryType::Hourly => "Pay based on hours worked",
            SalaryType::Monthly => "Fixed monthly salary",
            SalaryType::Commission => "Base plus commission on sales",
            SalaryType::Performance => "Base plus performance bonus",
            SalaryType::Fixed => "Flat amount independent of hours",
            SalaryType::Mixed => "Base plus commission plus bonus",
        }
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryType {
    type Err = EngineError;

    /// Parses a wire name into a salary type.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetrack_engine::models::SalaryType;
    /// use timetrack_engine::error::EngineError;
    ///
    /// assert_eq!("mixed".parse::<SalaryType>().unwrap(), SalaryType::Mixed);
    /// assert!(matches!(
    ///     "unknown".parse::<SalaryType>(),
    ///     Err(EngineError::UnsupportedScheme { .. })
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SalaryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| EngineError::UnsupportedScheme {
                salary_type: s.to_string(),
            })
    }
}

/// The pay-scheme parameters of an employee.
///
/// Each variant carries exactly the fields its formula needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "salary_type", rename_all = "snake_case")]
pub enum SalaryScheme {
    /// Hourly pay.
    Hourly {
        /// Pay per regular hour.
        hourly_rate: Decimal,
    },
    /// Prorated monthly salary.
    Monthly {
        /// Salary for a full month.
        monthly_salary: Decimal,
    },
    /// Base salary plus commission.
    Commission {
        /// Guaranteed base salary.
        base_salary: Decimal,
        /// Commission as a fraction of sales (0-1).
        commission_rate: Decimal,
    },
    /// Base salary plus performance bonus.
    Performance {
        /// Guaranteed base salary.
        base_salary: Decimal,
    },
    /// Prorated flat amount.
    Fixed {
        /// Flat amount for a full month.
        fixed_amount: Decimal,
    },
    /// Base salary plus commission plus bonus.
    Mixed {
        /// Guaranteed base salary.
        base_salary: Decimal,
        /// Commission as a fraction of sales (0-1).
        commission_rate: Decimal,
        /// Bonus as a fraction of the base salary.
        #[serde(default)]
        bonus_rate: Decimal,
    },
}

impl SalaryScheme {
    /// Returns the salary type this scheme belongs to.
    pub fn salary_type(&self) -> SalaryType {
        match self {
            SalaryScheme::Hourly { .. } => SalaryType::Hourly,
            SalaryScheme::Monthly { .. } => SalaryType::Monthly,
            SalaryScheme::Commission { .. } => SalaryType::Commission,
            SalaryScheme::Performance { .. } => SalaryType::Performance,
            SalaryScheme::Fixed { .. } => SalaryType::Fixed,
            SalaryScheme::Mixed { .. } => SalaryType::Mixed,
        }
    }
}

/// The role of a dashboard user.
///
/// Role names are open-ended. Names other than the known ones are kept as
/// [`Role::Other`] and are never privileged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// A regular employee (`"Employé"`, or `"Employee"` on input).
    #[default]
    Employee,
    /// Human resources (`"RH"`).
    Hr,
    /// A team manager.
    Manager,
    /// An administrator.
    Admin,
    /// The super administrator.
    SuperAdmin,
    /// Any other role name, matched exactly as given.
    Other(String),
}

impl Role {
    /// Returns the role's wire name.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Employee => "Employé",
            Role::Hr => "RH",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
            Role::SuperAdmin => "SuperAdmin",
            Role::Other(name) => name,
        }
    }

    /// Returns true for roles that bypass the network allow-list.
    ///
    /// ```
    /// use timetrack_engine::models::Role;
    ///
    /// assert!(Role::Admin.is_privileged());
    /// assert!(!Role::Manager.is_privileged());
    /// assert!(!Role::Other("admin".to_string()).is_privileged());
    /// ```
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Employé" | "Employee" => Role::Employee,
            "RH" => Role::Hr,
            "Manager" => Role::Manager,
            "Admin" => Role::Admin,
            "SuperAdmin" => Role::SuperAdmin,
            _ => Role::Other(name),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An employee with a typed pay scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The employee's dashboard role.
    #[serde(default)]
    pub role: Role,
    /// Pay-scheme parameters.
    pub scheme: SalaryScheme,
}

impl Employee {
    /// Returns the employee's salary type.
    pub fn salary_type(&self) -> SalaryType {
        self.scheme.salary_type()
    }
}

/// An employee record as held by an external user directory.
///
/// Every scheme-specific attribute is optional here; converting into an
/// [`Employee`] checks that the attributes the scheme needs are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The employee's dashboard role.
    #[serde(default)]
    pub role: Role,
    /// The salary type name (e.g. "hourly").
    pub salary_type: String,
    /// Hourly rate, for hourly employees.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Monthly salary, for monthly employees.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Base salary, for commission, performance and mixed employees.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Commission rate, for commission and mixed employees.
    #[serde(default)]
    pub commission_rate: Option<Decimal>,
    /// Flat amount, for fixed-rate employees.
    #[serde(default)]
    pub fixed_amount: Option<Decimal>,
    /// Bonus rate, for mixed employees.
    #[serde(default)]
    pub bonus_rate: Option<Decimal>,
}

fn required(value: Option<Decimal>, field: &str, salary_type: SalaryType) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::InvalidEmployee {
        field: field.to_string(),
        message: format!("required for {} pay scheme", salary_type),
    })
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EngineError;

    fn try_from(record: EmployeeRecord) -> EngineResult<Self> {
        let salary_type: SalaryType = record.salary_type.parse()?;

        let scheme = match salary_type {
            SalaryType::Hourly => SalaryScheme::Hourly {
                hourly_rate: required(record.hourly_rate, "hourly_rate", salary_type)?,
            },
            SalaryType::Monthly => SalaryScheme::Monthly {
                monthly_salary: required(record.monthly_salary, "monthly_salary", salary_type)?,
            },
            SalaryType::Commission => SalaryScheme::Commission {
                base_salary: required(record.base_salary, "base_salary", salary_type)?,
                commission_rate: required(record.commission_rate, "commission_rate", salary_type)?,
            },
            SalaryType::Performance => SalaryScheme::Performance {
                base_salary: required(record.base_salary, "base_salary", salary_type)?,
            },
            // Older records store the flat amount in monthly_salary.
            SalaryType::Fixed => SalaryScheme::Fixed {
                fixed_amount: required(
                    record.fixed_amount.or(record.monthly_salary),
                    "fixed_amount",
                    salary_type,
                )?,
            },
            SalaryType::Mixed => SalaryScheme::Mixed {
                base_salary: required(record.base_salary, "base_salary", salary_type)?,
                commission_rate: required(record.commission_rate, "commission_rate", salary_type)?,
                bonus_rate: record.bonus_rate.unwrap_or(Decimal::ZERO),
            },
        };

        Ok(Employee {
            id: record.id,
            name: record.name,
            role: record.role,
            scheme,
        })
    }
}
