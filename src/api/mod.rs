//! HTTP API module for the TimeTrack engine.
//!
//! This module provides the REST API endpoints for salary calculation,
//! the employee directory and the network access policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccessCheckRequest, EmployeeListQuery, SalaryRequest};
pub use response::{ApiError, ApiErrorResponse, FormattedSummary, SalaryResponse, SalaryTypeInfo};
pub use state::AppState;
