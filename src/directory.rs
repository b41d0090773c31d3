//! Employee directory.
//!
//! Employee records are owned outside the engine; the engine only looks
//! them up through the [`EmployeeDirectory`] trait.

use std::collections::HashMap;

use crate::models::{Employee, SalaryType};

/// Read access to employee records.
pub trait EmployeeDirectory: Send + Sync {
    /// Looks up an employee by id.
    fn find(&self, id: &str) -> Option<Employee>;

    /// Lists employees, optionally restricted to one salary type, ordered by id.
    fn list(&self, salary_type: Option<SalaryType>) -> Vec<Employee>;
}

/// An [`EmployeeDirectory`] held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    employees: HashMap<String, Employee>,
}

impl InMemoryDirectory {
    /// Builds a directory from a list of employees; later duplicates replace earlier ones.
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn find(&self, id: &str) -> Option<Employee> {
        self.employees.get(id).cloned()
    }

    fn list(&self, salary_type: Option<SalaryType>) -> Vec<Employee> {
        let mut employees: Vec<Employee> = self
            .employees
            .values()
            .filter(|e| salary_type.is_none_or(|t| e.salary_type() == t))
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        employees
    }
}
