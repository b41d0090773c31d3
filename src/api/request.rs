//! Request types for the TimeTrack engine API.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, PayPeriodInput, Role, SalaryType};

/// Request body for the `/salary/calculate` endpoint.
///
/// The employee arrives as a loose directory record; the handler converts
/// it into a typed [`Employee`](crate::models::Employee) before calculating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The employee record.
    pub employee: EmployeeRecord,
    /// Period inputs. Omitted fields default to zero.
    #[serde(default)]
    pub period: PayPeriodInput,
}

/// Request body for the `/network/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessCheckRequest {
    /// The caller's dashboard role.
    pub role: Role,
    /// The client address, if the caller knows it.
    #[serde(default)]
    pub ip: Option<String>,
}

/// Query parameters for `GET /employees`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeListQuery {
    /// Restricts the listing to one salary type.
    #[serde(default)]
    pub salary_type: Option<String>,
}

impl EmployeeListQuery {
    /// Parses the salary type filter, rejecting unknown names.
    pub fn filter(&self) -> EngineResult<Option<SalaryType>> {
        self.salary_type.as_deref().map(str::parse).transpose()
    }
}
