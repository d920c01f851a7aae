//! HTTP API module for the calculator suite.
//!
//! This module provides the REST endpoints for invoking each calculator.
//! One POST route per calculator plus a health endpoint; all calculation
//! happens synchronously in the request handler.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AdmissionRequest, AgeRequest, CgpaRequest, DpsRequest, EmiRequest, FdrRequest, GoldRequest,
    GpaRequest, GpaToPercentageRequest, PercentageToGpaRequest, SalaryTaxRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, CgpaResponse, GoldResponse, GpaResponse, HealthResponse,
    PercentageResponse, SalaryTaxResponse,
};
pub use state::AppState;
