//! HTTP request handlers for the compensation engine API.
//!
//! This module contains the handler functions for all simulation
//! endpoints. Every endpoint follows the same shape: parse the scenario
//! input, run the matching calculator against the loaded tables, and
//! wrap the result in a [`SimulationEnvelope`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_contractor, calculate_monthly_salary, calculate_severance, calculate_thirteenth,
    calculate_vacation, simulate_income_tax,
};
use crate::models::{
    ContractorInput, IncomeTaxInput, MonthlySalaryInput, ScenarioKind, SeveranceInput,
    ThirteenthInput, VacationInput,
};

use super::response::{ApiError, ApiErrorResponse, SimulationEnvelope};
use super::state::AppState;

/// Creates the API router with all simulation endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate/salary", post(salary_handler))
        .route("/simulate/vacation", post(vacation_handler))
        .route("/simulate/thirteenth", post(thirteenth_handler))
        .route("/simulate/severance", post(severance_handler))
        .route("/simulate/contractor", post(contractor_handler))
        .route("/simulate/income-tax", post(income_tax_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, translating axum rejections into error responses.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(input)) => Ok(input),
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
                        ApiError::validation_error(body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Serializes a successful simulation result with explicit content type.
fn ok_json<T: Serialize>(envelope: SimulationEnvelope<T>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(envelope),
    )
        .into_response()
}

/// Handler for POST /simulate/salary.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlySalaryInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly salary simulation");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = calculate_monthly_salary(&input, state.config().config());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %input.gross_salary,
        net_pay = %result.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Monthly salary simulation completed"
    );
    ok_json(SimulationEnvelope::new(ScenarioKind::MonthlySalary, result))
}

/// Handler for POST /simulate/vacation.
async fn vacation_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation simulation");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = calculate_vacation(&input, state.config().config());
    info!(
        correlation_id = %correlation_id,
        days_taken = input.days_taken,
        net_pay = %result.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Vacation simulation completed"
    );
    ok_json(SimulationEnvelope::new(ScenarioKind::Vacation, result))
}

/// Handler for POST /simulate/thirteenth.
async fn thirteenth_handler(
    State(state): State<AppState>,
    payload: Result<Json<ThirteenthInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing 13th-salary simulation");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = calculate_thirteenth(&input, state.config().config());
    info!(
        correlation_id = %correlation_id,
        months_worked = input.months_worked,
        net_total = %result.net_total,
        duration_us = start_time.elapsed().as_micros(),
        "13th-salary simulation completed"
    );
    ok_json(SimulationEnvelope::new(ScenarioKind::ThirteenthSalary, result))
}

/// Handler for POST /simulate/severance.
async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing severance simulation");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = calculate_severance(&input, state.config().config());
    info!(
        correlation_id = %correlation_id,
        reason = ?input.reason,
        net_total = %result.net_total,
        duration_us = start_time.elapsed().as_micros(),
        "Severance simulation completed"
    );
    ok_json(SimulationEnvelope::new(ScenarioKind::Severance, result))
}

/// Handler for POST /simulate/contractor.
async fn contractor_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContractorInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing contractor simulation");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    // Resolve the regime before any arithmetic runs
    let regime = match state.config().get_regime(&input.regime) {
        Ok(regime) => regime.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                regime = %input.regime,
                "Unknown contractor regime"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let result = calculate_contractor(&input, &regime);
    info!(
        correlation_id = %correlation_id,
        regime = %input.regime,
        net_income = %result.net_income,
        duration_us = start_time.elapsed().as_micros(),
        "Contractor simulation completed"
    );
    ok_json(SimulationEnvelope::new(ScenarioKind::Contractor, result))
}

/// Handler for POST /simulate/income-tax.
async fn income_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncomeTaxInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing income-tax simulation");

    let input = match parse_payload(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = simulate_income_tax(&input, state.config().config());
    info!(
        correlation_id = %correlation_id,
        gross_income = %input.gross_income,
        tax = %result.tax,
        duration_us = start_time.elapsed().as_micros(),
        "Income-tax simulation completed"
    );
    ok_json(SimulationEnvelope::new(ScenarioKind::IncomeTax, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/clt2026").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: &str) -> axum::response::Response {
        let router = create_router(create_test_state());
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_salary_endpoint_returns_envelope() {
        let response = post_json("/simulate/salary", r#"{"gross_salary": "3000"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let json = body_json(response).await;
        assert_eq!(json["scenario"], "monthly_salary");
        assert!(json["simulation_id"].is_string());
        assert!(json["timestamp"].is_string());
        assert_eq!(
            Decimal::from_str(json["net_pay"].as_str().unwrap()).unwrap(),
            Decimal::from_str("2751.40").unwrap()
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_json("/simulate/salary", "{invalid json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let response = post_json("/simulate/vacation", r#"{"gross_salary": "3000"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("days_taken"));
    }

    #[tokio::test]
    async fn test_unknown_regime_returns_400() {
        let response = post_json(
            "/simulate/contractor",
            r#"{"monthly_revenue": "10000", "regime": "simples_anexo_ix"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "UNKNOWN_REGIME");
        assert!(json["message"].as_str().unwrap().contains("simples_anexo_ix"));
    }

    #[tokio::test]
    async fn test_income_tax_endpoint() {
        let response = post_json("/simulate/income-tax", r#"{"gross_income": "5200"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["scenario"], "income_tax");
        assert_eq!(json["tax"], "71.62");
    }
}
