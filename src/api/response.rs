//! Response types for the TimeTrack engine API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Currency, SalaryResult, SalaryType, format_amount};

/// Summary amounts formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSummary {
    /// Formatted gross salary.
    pub gross_salary: String,
    /// Formatted net salary.
    pub net_salary: String,
    /// Formatted total employer cost.
    pub total_cost: String,
}

/// Response body for salary calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryResponse {
    /// The full calculation result.
    #[serde(flatten)]
    pub result: SalaryResult,
    /// The display currency.
    pub currency: Currency,
    /// The summary formatted in `currency`.
    pub formatted: FormattedSummary,
}

impl SalaryResponse {
    /// Wraps a result with its display formatting.
    pub fn new(result: SalaryResult, currency: Currency) -> Self {
        let formatted = FormattedSummary {
            gross_salary: format_amount(result.summary.gross_salary, currency),
            net_salary: format_amount(result.summary.net_salary, currency),
            total_cost: format_amount(result.summary.total_cost, currency),
        };
        Self {
            result,
            currency,
            formatted,
        }
    }
}

/// One entry of the salary type listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTypeInfo {
    /// Wire name of the salary type.
    pub value: SalaryType,
    /// Short label.
    pub label: String,
    /// One-line description.
    pub description: String,
}

impl From<SalaryType> for SalaryTypeInfo {
    fn from(salary_type: SalaryType) -> Self {
        Self {
            value: salary_type,
            label: salary_type.label().to_string(),
            description: salary_type.description().to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message)
                    .with_path(path),
            },
            EngineError::ConfigParseError { path, .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration parse error", message)
                    .with_path(path),
            },
            EngineError::UnsupportedScheme { salary_type } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_SCHEME",
                    message,
                    format!(
                        "'{}' is not one of: hourly, monthly, commission, performance, fixed, mixed",
                        salary_type
                    ),
                ),
            },
            EngineError::InvalidArgument { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ARGUMENT", message),
            },
            EngineError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            },
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            EngineError::InvalidIpAddress { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_IP_ADDRESS", message),
            },
        }
    }
}

impl ApiError {
    fn with_path(mut self, path: String) -> Self {
        self.details = Some(format!("{} ({})", self.details.unwrap_or_default(), path));
        self
    }
}
