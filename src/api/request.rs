//! Request types for the calculator API.
//!
//! This module defines the JSON request structures for each calculator
//! endpoint. Optional fields mirror the "blank form field" semantics of the
//! calculation core: absent values default to zero or to `None` rather
//! than rejecting the request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::AdmissionOptions;
use crate::models::{CourseEntry, GradeEntry};

/// Request body for the `/gpa` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaRequest {
    /// The subject rows; blank rows are permitted and ignored.
    #[serde(default)]
    pub subjects: Vec<GradeEntry>,
}

/// Request body for the `/cgpa` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaRequest {
    /// The course rows; incomplete rows are permitted and ignored.
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
}

/// Request body for the `/gpa/from-percentage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageToGpaRequest {
    /// The percentage to convert; absent yields "0.00".
    #[serde(default)]
    pub percentage: Option<Decimal>,
}

/// Request body for the `/gpa/to-percentage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaToPercentageRequest {
    /// The GPA to convert; absent yields "0.00".
    #[serde(default)]
    pub gpa: Option<Decimal>,
}

/// Request body for the `/admission` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionRequest {
    /// SSC GPA on the 5.00 scale.
    pub ssc_gpa: Decimal,
    /// HSC GPA on the 5.00 scale.
    pub hsc_gpa: Decimal,
    /// The admission system identifier (e.g., "du", "medical").
    pub system: String,
    /// Whether the candidate is a second-time examinee.
    #[serde(default)]
    pub is_second_timer: bool,
    /// Whether the candidate was previously admitted elsewhere.
    #[serde(default)]
    pub is_prev_admitted: bool,
}

impl AdmissionRequest {
    /// Extracts the deduction options from the request.
    pub fn options(&self) -> AdmissionOptions {
        AdmissionOptions {
            is_second_timer: self.is_second_timer,
            is_prev_admitted: self.is_prev_admitted,
        }
    }
}

/// Request body for the `/dps` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DpsRequest {
    /// The monthly deposit amount; absent or zero yields the zero result.
    #[serde(default)]
    pub monthly_deposit: f64,
    /// The annual interest rate in percent.
    #[serde(default)]
    pub annual_rate: f64,
    /// The term in years.
    #[serde(default)]
    pub years: f64,
}

/// Request body for the `/fdr` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdrRequest {
    /// The lump-sum principal; absent or zero yields the zero result.
    #[serde(default)]
    pub principal: f64,
    /// The annual interest (or profit) rate in percent.
    #[serde(default)]
    pub annual_rate: f64,
    /// The term in years.
    #[serde(default)]
    pub years: f64,
    /// Whether the instrument is labelled Islamic (Mudaraba).
    #[serde(default)]
    pub is_islamic: bool,
}

/// Request body for the `/emi` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiRequest {
    /// The loan principal; absent or zero yields the zero result.
    #[serde(default)]
    pub principal: f64,
    /// The annual interest rate in percent.
    #[serde(default)]
    pub annual_rate: f64,
    /// The term in years.
    #[serde(default)]
    pub years: f64,
}

/// Request body for the `/gold` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldRequest {
    /// The reference price per gram of 24k gold.
    #[serde(default)]
    pub price_24k: Decimal,
    /// The weight in grams.
    #[serde(default)]
    pub grams: Decimal,
    /// The karat rating; defaults to 24 (pure).
    #[serde(default = "default_karat")]
    pub karat: u32,
}

fn default_karat() -> u32 {
    24
}

/// Request body for the `/age` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeRequest {
    /// The date of birth as a YYYY-MM-DD string.
    pub date_of_birth: String,
    /// The reference date to compute the age against; defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `/salary-tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryTaxRequest {
    /// The gross monthly salary in Taka.
    #[serde(default)]
    pub monthly_salary: Decimal,
}
