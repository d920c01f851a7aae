//! Response types for the calculator API.
//!
//! This module defines the success wrappers for calculators whose core
//! result is a single value, plus the error response structures and error
//! mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the service is up.
    pub status: String,
}

/// Response body for GPA calculation and percentage-to-GPA conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaResponse {
    /// The GPA as a fixed two-decimal string.
    pub gpa: String,
}

/// Response body for CGPA calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaResponse {
    /// The CGPA as a fixed two-decimal string.
    pub cgpa: String,
}

/// Response body for GPA-to-percentage conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageResponse {
    /// The percentage as a fixed two-decimal string.
    pub percentage: String,
}

/// Response body for gold valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldResponse {
    /// The purity-adjusted value in whole Taka.
    pub value: i64,
}

/// Response body for salary tax calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryTaxResponse {
    /// The annual tax due in whole Taka.
    pub annual_tax: i64,
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

    /// Creates an unknown-admission-system error response.
    pub fn system_not_found(id: &str) -> Self {
        Self::with_details(
            "SYSTEM_NOT_FOUND",
            format!("Admission system not found: {}", id),
            format!("The admission system '{}' is not supported by this engine", id),
        )
    }

    /// Creates an invalid-body-metrics error response.
    pub fn invalid_metrics() -> Self {
        Self::new(
            "INVALID_METRICS",
            "Weight and height must both be positive values",
        )
    }

    /// Creates an invalid-date error response.
    pub fn invalid_date(input: &str) -> Self {
        Self::with_details(
            "INVALID_DATE",
            "date_of_birth is not a valid date",
            format!("Could not parse '{}' as a YYYY-MM-DD date", input),
        )
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::SystemNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::system_not_found(&id),
            },
            EngineError::InvalidRequest { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
        }
    }
}
