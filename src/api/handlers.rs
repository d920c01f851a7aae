//! HTTP request handlers for the calculator API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! calculator gets one POST endpoint; every request is assigned a
//! correlation ID for log tracing. Calculation itself can never fail, so
//! error responses arise only from malformed requests, unknown admission
//! systems, or inputs the core maps to `None`.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    assess_zakat, calculate_age, calculate_bmi, calculate_dps, calculate_emi, calculate_fdr,
    calculate_salary_tax, compute_cgpa, compute_gpa, gold_value, gpa_to_percentage,
    percentage_to_gpa, score_admission,
};
use crate::models::{AssetLedger, BodyMetrics};

use super::request::{
    AdmissionRequest, AgeRequest, CgpaRequest, DpsRequest, EmiRequest, FdrRequest, GoldRequest,
    GpaRequest, GpaToPercentageRequest, PercentageToGpaRequest, SalaryTaxRequest,
};
use super::response::{
    ApiError, CgpaResponse, GoldResponse, GpaResponse, HealthResponse, PercentageResponse,
    SalaryTaxResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/gpa", post(gpa_handler))
        .route("/cgpa", post(cgpa_handler))
        .route("/gpa/from-percentage", post(percentage_to_gpa_handler))
        .route("/gpa/to-percentage", post(gpa_to_percentage_handler))
        .route("/admission", post(admission_handler))
        .route("/dps", post(dps_handler))
        .route("/fdr", post(fdr_handler))
        .route("/emi", post(emi_handler))
        .route("/gold", post(gold_handler))
        .route("/bmi", post(bmi_handler))
        .route("/age", post(age_handler))
        .route("/salary-tax", post(salary_tax_handler))
        .route("/zakat", post(zakat_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, mapping rejections to a 400 response.
fn unwrap_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Handler for POST /gpa.
async fn gpa_handler(payload: Result<Json<GpaRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let gpa = compute_gpa(&request.subjects);
    info!(
        correlation_id = %correlation_id,
        subjects = request.subjects.len(),
        gpa = %gpa,
        "GPA calculated"
    );
    (StatusCode::OK, Json(GpaResponse { gpa })).into_response()
}

/// Handler for POST /cgpa.
async fn cgpa_handler(payload: Result<Json<CgpaRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let cgpa = compute_cgpa(&request.courses);
    info!(
        correlation_id = %correlation_id,
        courses = request.courses.len(),
        cgpa = %cgpa,
        "CGPA calculated"
    );
    (StatusCode::OK, Json(CgpaResponse { cgpa })).into_response()
}

/// Handler for POST /gpa/from-percentage.
async fn percentage_to_gpa_handler(
    payload: Result<Json<PercentageToGpaRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let gpa = percentage_to_gpa(request.percentage);
    info!(correlation_id = %correlation_id, gpa = %gpa, "Percentage converted to GPA");
    (StatusCode::OK, Json(GpaResponse { gpa })).into_response()
}

/// Handler for POST /gpa/to-percentage.
async fn gpa_to_percentage_handler(
    payload: Result<Json<GpaToPercentageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let percentage = gpa_to_percentage(request.gpa);
    info!(correlation_id = %correlation_id, percentage = %percentage, "GPA converted to percentage");
    (StatusCode::OK, Json(PercentageResponse { percentage })).into_response()
}

/// Handler for POST /admission.
async fn admission_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdmissionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let score = score_admission(
        request.ssc_gpa,
        request.hsc_gpa,
        &request.system,
        &request.options(),
        state.config().admission(),
    );

    match score {
        Some(score) => {
            info!(
                correlation_id = %correlation_id,
                system = %request.system,
                final_gpa_score = %score.final_gpa_score,
                "Admission score calculated"
            );
            (StatusCode::OK, Json(score)).into_response()
        }
        None => {
            warn!(
                correlation_id = %correlation_id,
                system = %request.system,
                "Admission system not found"
            );
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::system_not_found(&request.system)),
            )
                .into_response()
        }
    }
}

/// Handler for POST /dps.
async fn dps_handler(payload: Result<Json<DpsRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = calculate_dps(request.monthly_deposit, request.annual_rate, request.years);
    info!(
        correlation_id = %correlation_id,
        maturity = result.maturity,
        "DPS maturity calculated"
    );
    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /fdr.
async fn fdr_handler(payload: Result<Json<FdrRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = calculate_fdr(
        request.principal,
        request.annual_rate,
        request.years,
        request.is_islamic,
    );
    info!(
        correlation_id = %correlation_id,
        maturity = result.maturity,
        is_islamic = result.is_islamic,
        "FDR maturity calculated"
    );
    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /emi.
async fn emi_handler(payload: Result<Json<EmiRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = calculate_emi(request.principal, request.annual_rate, request.years);
    info!(
        correlation_id = %correlation_id,
        emi = result.emi,
        "EMI calculated"
    );
    (StatusCode::OK, Json(result)).into_response()
}

/// Handler for POST /gold.
async fn gold_handler(payload: Result<Json<GoldRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let value = gold_value(request.price_24k, request.grams, request.karat);
    info!(
        correlation_id = %correlation_id,
        karat = request.karat,
        value = value,
        "Gold valued"
    );
    (StatusCode::OK, Json(GoldResponse { value })).into_response()
}

/// Handler for POST /bmi.
async fn bmi_handler(payload: Result<Json<BodyMetrics>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let metrics = match unwrap_json(payload, correlation_id) {
        Ok(metrics) => metrics,
        Err(response) => return response,
    };

    match calculate_bmi(&metrics) {
        Some(report) => {
            info!(
                correlation_id = %correlation_id,
                score = report.score,
                status = %report.status,
                "BMI calculated"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        None => {
            warn!(correlation_id = %correlation_id, "Invalid body metrics");
            (StatusCode::BAD_REQUEST, Json(ApiError::invalid_metrics())).into_response()
        }
    }
}

/// Handler for POST /age.
async fn age_handler(payload: Result<Json<AgeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let today = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    match calculate_age(&request.date_of_birth, today) {
        Some(age) => {
            info!(
                correlation_id = %correlation_id,
                years = age.years,
                "Age calculated"
            );
            (StatusCode::OK, Json(age)).into_response()
        }
        None => {
            warn!(
                correlation_id = %correlation_id,
                date_of_birth = %request.date_of_birth,
                "Unparsable date of birth"
            );
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::invalid_date(&request.date_of_birth)),
            )
                .into_response()
        }
    }
}

/// Handler for POST /salary-tax.
async fn salary_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryTaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match unwrap_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let annual_tax = calculate_salary_tax(request.monthly_salary, state.config().tax());
    info!(
        correlation_id = %correlation_id,
        annual_tax = annual_tax,
        "Salary tax calculated"
    );
    (StatusCode::OK, Json(SalaryTaxResponse { annual_tax })).into_response()
}

/// Handler for POST /zakat.
async fn zakat_handler(payload: Result<Json<AssetLedger>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let ledger = match unwrap_json(payload, correlation_id) {
        Ok(ledger) => ledger,
        Err(response) => return response,
    };

    let assessment = assess_zakat(&ledger);
    info!(
        correlation_id = %correlation_id,
        eligible = assessment.is_zakat_eligible,
        zakat_payable = %assessment.zakat_payable,
        "Zakat assessed"
    );
    (StatusCode::OK, Json(assessment)).into_response()
}
