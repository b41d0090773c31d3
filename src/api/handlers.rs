//! HTTP request handlers for the TimeTrack engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::access::{NetworkConfigUpdate, check_access, ip_to_int};
use crate::calculation::calculate_complete_salary;
use crate::error::EngineError;
use crate::models::{Employee, PayPeriodInput, SalaryType};

use super::request::{AccessCheckRequest, EmployeeListQuery, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse, SalaryResponse, SalaryTypeInfo};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salary/calculate", post(calculate_salary_handler))
        .route("/salary/types", get(salary_types_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id/salary", post(employee_salary_handler))
        .route("/network/check", post(network_check_handler))
        .route(
            "/network/config",
            get(get_network_config_handler).put(update_network_config_handler),
        )
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure onto the API error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Well-formed JSON that does not fit the request shape
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn salary_response(
    state: &AppState,
    correlation_id: Uuid,
    employee: &Employee,
    period: &PayPeriodInput,
) -> Response {
    match calculate_complete_salary(employee, period, state.payroll()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                salary_type = %result.salary_type,
                gross_salary = %result.summary.gross_salary,
                duration_us = result.audit_trace.duration_us,
                "Salary calculation completed successfully"
            );
            json_response(StatusCode::OK, SalaryResponse::new(result, state.currency()))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /salary/calculate.
///
/// Calculates the salary of an employee described in the request body.
async fn calculate_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employee = match Employee::try_from(request.employee) {
        Ok(employee) => employee,
        Err(err) => return error_response(correlation_id, err),
    };

    salary_response(&state, correlation_id, &employee, &request.period)
}

/// Handler for POST /employees/:id/salary.
///
/// Calculates the salary of a directory employee for the posted period.
async fn employee_salary_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PayPeriodInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing employee salary request");

    let period = match payload {
        Ok(Json(period)) => period,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let Some(employee) = state.directory().find(&id) else {
        return error_response(correlation_id, EngineError::EmployeeNotFound { id });
    };

    salary_response(&state, correlation_id, &employee, &period)
}

/// Handler for GET /employees.
async fn list_employees_handler(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match query.filter() {
        Ok(filter) => {
            let employees = state.directory().list(filter);
            info!(
                correlation_id = %correlation_id,
                count = employees.len(),
                "Listed employees"
            );
            json_response(StatusCode::OK, employees)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /salary/types.
async fn salary_types_handler() -> Response {
    let types: Vec<SalaryTypeInfo> = SalaryType::ALL.iter().copied().map(Into::into).collect();
    json_response(StatusCode::OK, types)
}

/// Resolves the client address: request body first, then the first
/// `X-Forwarded-For` hop, then the configured source.
///
/// The body and header values are supplied by the caller, so any caller can
/// claim an allow-listed address. This adapter must only be exposed behind a
/// trusted proxy that sets `X-Forwarded-For` and strips client-supplied `ip`.
fn resolve_client_ip(
    state: &AppState,
    headers: &HeaderMap,
    body_ip: Option<String>,
) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    body_ip
        .or(forwarded)
        .or_else(|| state.ip_source().current_ip())
}

/// Handler for POST /network/check.
///
/// See [`resolve_client_ip`] for where the client address comes from; the
/// handler trusts it as given.
async fn network_check_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AccessCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let ip = resolve_client_ip(&state, &headers, request.ip);
    if let Some(Err(err)) = ip.as_deref().map(ip_to_int) {
        // A malformed address matches no allow-list entry
        warn!(correlation_id = %correlation_id, error = %err, "Client address is malformed");
    }

    let config = state.network().read().await.clone();
    let decision = check_access(ip.as_deref(), &config, &request.role);

    info!(
        correlation_id = %correlation_id,
        role = %request.role,
        ip = decision.ip.as_deref().unwrap_or("unknown"),
        allowed = decision.allowed,
        "Network access checked"
    );

    json_response(StatusCode::OK, decision)
}

/// Handler for GET /network/config.
async fn get_network_config_handler(State(state): State<AppState>) -> Response {
    let config = state.network().read().await.clone();
    json_response(StatusCode::OK, config)
}

/// Handler for PUT /network/config.
///
/// Merges the update into the live policy and returns the result.
async fn update_network_config_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetworkConfigUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let merged = {
        let mut config = state.network().write().await;
        config.apply(update);
        config.clone()
    };

    for entry in merged.invalid_entries() {
        warn!(
            correlation_id = %correlation_id,
            entry = %entry,
            "Allow-list entry is not a valid address or range"
        );
    }
    info!(
        correlation_id = %correlation_id,
        enforce = merged.enforce,
        entries = merged.allowed.len(),
        "Network configuration updated"
    );

    json_response(StatusCode::OK, merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{AccessDecision, NetworkConfig};
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_calculate_commission_returns_200() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee": {"id": "emp_x", "salary_type": "commission", "base_salary": "1000", "commission_rate": "0.1"},
            "period": {"sales_amount": "5000"}
        }"#;

        let response = router.oneshot(post("/salary/calculate", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: SalaryResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.result.summary.gross_salary, Decimal::from(1500));
        assert_eq!(result.result.summary.net_salary, Decimal::from(1155));
        assert_eq!(result.formatted.total_cost, "2175.00 CFA");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, post("/salary/calculate", "{invalid json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_employee_id_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"employee": {"salary_type": "hourly", "hourly_rate": "10"}}"#;

        let (status, body) = send(router, post("/salary/calculate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_api_004_unknown_salary_type_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"employee": {"id": "e", "salary_type": "barter"}}"#;

        let (status, body) = send(router, post("/salary/calculate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNSUPPORTED_SCHEME");
    }

    #[tokio::test]
    async fn test_api_005_missing_scheme_field_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"employee": {"id": "e", "salary_type": "hourly"}}"#;

        let (status, body) = send(router, post("/salary/calculate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_api_006_negative_hours_returns_invalid_argument() {
        let router = create_router(create_test_state());
        let body = r#"{
            "employee": {"id": "e", "salary_type": "hourly", "hourly_rate": "10"},
            "period": {"hours_worked": "-1"}
        }"#;

        let (status, body) = send(router, post("/salary/calculate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_employee_salary_uses_directory() {
        let router = create_router(create_test_state());

        // emp_004 is hourly at 12.50: 40 * 12.50 + 2 * 12.50 * 1.5 = 537.50
        let (status, body) = send(
            router,
            post("/employees/emp_004/salary", r#"{"hours_worked": "42"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employee_id"], "emp_004");
        assert_eq!(body["salary_type"], "hourly");
        assert_eq!(body["formatted"]["gross_salary"], "537.50 CFA");
    }

    #[tokio::test]
    async fn test_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let (status, body) = send(router, post("/employees/emp_999/salary", "{}")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_employees_filtered() {
        let router = create_router(create_test_state());

        let request = Request::builder()
            .uri("/employees?salary_type=monthly")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        let employees: Vec<Employee> = serde_json::from_value(body).unwrap();
        let ids: Vec<&str> = employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["emp_001", "emp_002"]);
    }

    #[tokio::test]
    async fn test_list_employees_unknown_filter_returns_400() {
        let router = create_router(create_test_state());

        let request = Request::builder()
            .uri("/employees?salary_type=barter")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNSUPPORTED_SCHEME");
    }

    #[tokio::test]
    async fn test_salary_types_lists_all_six() {
        let router = create_router(create_test_state());

        let request = Request::builder()
            .uri("/salary/types")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        let types: Vec<SalaryTypeInfo> = serde_json::from_value(body).unwrap();
        assert_eq!(types.len(), 6);
        assert_eq!(types[0].value, SalaryType::Hourly);
    }

    #[tokio::test]
    async fn test_network_check_with_enforcement_off_allows_all() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            post("/network/check", r#"{"role": "Employé", "ip": "8.8.8.8"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let decision: AccessDecision = serde_json::from_value(body).unwrap();
        assert!(decision.allowed);
        assert!(!decision.privileged);
    }

    #[tokio::test]
    async fn test_network_check_malformed_ip_without_enforcement_is_allowed() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            post("/network/check", r#"{"role": "Employé", "ip": "192.168.1"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], true);
        assert_eq!(body["ip"], "192.168.1");
    }

    #[tokio::test]
    async fn test_network_check_malformed_ip_privileged_is_allowed() {
        let state = create_test_state();
        state.network().write().await.enforce = true;
        let router = create_router(state);

        let (status, body) = send(
            router.clone(),
            post("/network/check", r#"{"role": "Admin", "ip": "not-an-ip"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], true);

        let (status, body) = send(
            router,
            post("/network/check", r#"{"role": "Employé", "ip": "not-an-ip"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], false);
    }

    #[tokio::test]
    async fn test_wrong_field_type_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, body) = send(
            router,
            post("/network/check", r#"{"role": 42}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_network_check_prefers_forwarded_header_over_source() {
        let state = create_test_state();
        state.network().write().await.enforce = true;
        let router = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/network/check")
            .header("Content-Type", "application/json")
            .header("X-Forwarded-For", "10.0.0.15, 172.16.0.1")
            .body(Body::from(r#"{"role": "Employé"}"#))
            .unwrap();
        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        let decision: AccessDecision = serde_json::from_value(body).unwrap();
        assert_eq!(decision.ip.as_deref(), Some("10.0.0.15"));
        assert!(decision.allowed);
        assert_eq!(decision.location, "Bureau Principal");
    }

    #[tokio::test]
    async fn test_update_network_config_merges_fields() {
        let state = create_test_state();

        let request = Request::builder()
            .method("PUT")
            .uri("/network/config")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"enforce": true}"#))
            .unwrap();
        let (status, body) = send(create_router(state.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        let merged: NetworkConfig = serde_json::from_value(body).unwrap();
        assert!(merged.enforce);
        assert_eq!(merged.allowed.len(), 2);

        let request = Request::builder()
            .uri("/network/config")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(create_router(state), request).await;
        let current: NetworkConfig = serde_json::from_value(body).unwrap();
        assert_eq!(current, merged);
    }
}
