//! HTTP request handlers for the payroll rule engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payroll, is_sunday, resolve_rate};
use crate::models::{Employee, RuleMode};

use super::request::ComputeRequest;
use super::response::{ApiError, ApiErrorResponse, ComputeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compute", post(compute_handler))
        .with_state(state)
}

/// Handler for POST /compute endpoint.
///
/// Accepts a compute request and returns the payroll breakdown for the
/// timecard interval, rounded for presentation.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Select the governing rule set from the project's union flag
    let mode = if request.shift.is_union_project {
        RuleMode::Union
    } else {
        RuleMode::Company
    };
    let rules = state.rules().rules_for(mode);

    let employee: Employee = request.employee.into();

    // Perform the calculation
    let start_time = Instant::now();
    let resolution = resolve_rate(&employee, &request.shift.role, 5);
    let sunday = is_sunday(request.clock_in);
    match compute_payroll(
        request.clock_in,
        request.clock_out,
        rules,
        sunday,
        resolution.rate,
        request.reimbursement,
    ) {
        Ok(mut breakdown) => {
            let rate = resolution.effective();
            breakdown.audit_trace.steps.push(resolution.audit_step);

            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                shift_id = %request.shift.id,
                employee_id = %employee.id,
                mode = %mode,
                total_pay = %breakdown.total_pay,
                low_confidence = breakdown.low_confidence,
                duration_us = duration.as_micros(),
                "Compute completed successfully"
            );
            let response = ComputeResponse {
                rate,
                rate_source: resolution.source,
                breakdown: breakdown.rounded(),
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Compute failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{EmployeeRequest, PositionRequest, ShiftRequest};
    use crate::calculation::RateSource;
    use crate::config::RuleStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let rules = RuleStore::load("./config/rules").expect("Failed to load rules");
        AppState::new(rules)
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn create_valid_request() -> ComputeRequest {
        ComputeRequest {
            shift: ShiftRequest {
                id: "shift_001".to_string(),
                role: "Stagehand".to_string(),
                is_union_project: false,
            },
            employee: EmployeeRequest {
                id: "emp_001".to_string(),
                full_name: "Dana Reyes".to_string(),
                base_rate: Some(Decimal::from_str("25.00").unwrap()),
                positions: vec![],
            },
            clock_in: make_datetime("2024-03-10 09:00:00"),
            clock_out: make_datetime("2024-03-10 17:30:00"),
            reimbursement: Some(Decimal::ZERO),
        }
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let request = create_valid_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ComputeResponse = serde_json::from_slice(&body).unwrap();

        // 8.5h gross, 30 min break, 8h regular at $25.00
        assert_eq!(result.rate, Decimal::from_str("25.00").unwrap());
        assert_eq!(result.rate_source, RateSource::BaseRate);
        assert_eq!(
            result.breakdown.total_pay,
            Decimal::from_str("200.00").unwrap()
        );
        assert!(!result.breakdown.low_confidence);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_clock_out_returns_400() {
        let router = create_router(create_test_state());

        // JSON with missing clock_out field
        let body = r#"{
            "shift": { "id": "shift_001", "role": "Stagehand" },
            "employee": { "id": "emp_001", "full_name": "Dana Reyes" },
            "clock_in": "2024-03-10T09:00:00"
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("clock_out"),
            "Expected error message to mention missing field or clock_out, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_inverted_interval_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.clock_out = make_datetime("2024-03-10 08:00:00");
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "INVALID_INTERVAL");
    }

    #[tokio::test]
    async fn test_union_project_uses_union_rules() {
        let router = create_router(create_test_state());

        // 2024-03-10 is a Sunday; union rules convert all hours to overtime
        let mut request = create_valid_request();
        request.shift.is_union_project = true;
        request.clock_in = make_datetime("2024-03-10 10:00:00");
        request.clock_out = make_datetime("2024-03-10 15:00:00");
        request.employee.base_rate = Some(Decimal::from_str("20.00").unwrap());
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ComputeResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.breakdown.regular_hours, Decimal::ZERO);
        assert_eq!(
            result.breakdown.overtime_hours,
            Decimal::from_str("5.00").unwrap()
        );
        // 5 * 20 * 1.5 = 150
        assert_eq!(
            result.breakdown.total_pay,
            Decimal::from_str("150.00").unwrap()
        );
    }

    #[tokio::test]
    async fn test_position_override_beats_base_rate() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.shift.role = "Electrician".to_string();
        request.employee.positions = vec![PositionRequest {
            name: "electrician".to_string(),
            rate: Some(Decimal::from_str("35.00").unwrap()),
        }];
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ComputeResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.rate, Decimal::from_str("35.00").unwrap());
        assert_eq!(result.rate_source, RateSource::PositionOverride);
        // 8h * $35.00
        assert_eq!(
            result.breakdown.total_pay,
            Decimal::from_str("280.00").unwrap()
        );
    }

    #[tokio::test]
    async fn test_missing_rate_returns_zero_pay_low_confidence() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.employee.base_rate = None;
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compute")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ComputeResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.rate, Decimal::ZERO);
        assert_eq!(result.rate_source, RateSource::Missing);
        assert_eq!(result.breakdown.total_pay, Decimal::ZERO);
        assert!(result.breakdown.low_confidence);
    }
}
