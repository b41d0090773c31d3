//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Currency, Employee};

use super::types::{EmployeesConfig, EngineConfig, NetworkSettings, PayrollSettings};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates them before handing them to the calculation and access
/// layers.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml     # Overtime, proration, statutory rates, currency
/// ├── network.yaml     # Allow-list policy and fallback client IP
/// └── employees.yaml   # Optional seed for the employee directory
/// ```
///
/// # Example
///
/// ```no_run
/// use timetrack_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Employer rate: {}", loader.payroll().statutory.employer_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - payroll.yaml or network.yaml is missing
    /// - Any file contains invalid YAML
    /// - A payroll setting is out of range
    /// - Two seeded employees share an id
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timetrack_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), timetrack_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load payroll.yaml
        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollSettings>(&payroll_path)?;

        // Load network.yaml
        let network_path = path.join("network.yaml");
        let network = Self::load_yaml::<NetworkSettings>(&network_path)?;

        // employees.yaml is optional
        let employees_path = path.join("employees.yaml");
        let employees = if employees_path.exists() {
            Self::load_yaml::<EmployeesConfig>(&employees_path)?.employees
        } else {
            Vec::new()
        };

        let loader = Self::from_config(EngineConfig::new(payroll, network, employees))?;

        info!(
            path = %path.display(),
            employees = loader.employees().len(),
            enforce = loader.network().policy.enforce,
            "Configuration loaded"
        );

        Ok(loader)
    }

    /// Wraps an already-built configuration, applying the same validation as [`load`](Self::load).
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::validate_payroll(config.payroll())?;
        Self::validate_employees(config.employees())?;

        for entry in config.network().policy.invalid_entries() {
            warn!(entry = %entry, "Allow-list entry is not a valid address or range");
        }

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_payroll(payroll: &PayrollSettings) -> EngineResult<()> {
        let positive = [
            ("overtime.threshold_hours", payroll.overtime.threshold_hours),
            ("proration.days_in_month", payroll.proration.days_in_month),
        ];
        for (name, value) in positive {
            if value <= rust_decimal::Decimal::ZERO {
                return Err(EngineError::invalid_argument(
                    name,
                    format!("must be greater than zero (got {})", value),
                ));
            }
        }

        let non_negative = [
            ("overtime.multiplier", payroll.overtime.multiplier),
            ("statutory.employee_rate", payroll.statutory.employee_rate),
            ("statutory.employer_rate", payroll.statutory.employer_rate),
        ];
        for (name, value) in non_negative {
            if value < rust_decimal::Decimal::ZERO {
                return Err(EngineError::invalid_argument(
                    name,
                    format!("must not be negative (got {})", value),
                ));
            }
        }

        Ok(())
    }

    fn validate_employees(employees: &[Employee]) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for employee in employees {
            if !seen.insert(employee.id.as_str()) {
                return Err(EngineError::InvalidEmployee {
                    field: "id".to_string(),
                    message: format!("duplicate employee id '{}'", employee.id),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the payroll settings.
    pub fn payroll(&self) -> &PayrollSettings {
        self.config.payroll()
    }

    /// Returns the network settings.
    pub fn network(&self) -> &NetworkSettings {
        self.config.network()
    }

    /// Returns the seeded employees.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Returns the display currency.
    pub fn currency(&self) -> Currency {
        self.config.payroll().currency
    }
}
