//! Body mass index calculation and classification.

use serde::{Deserialize, Serialize};

use crate::models::{BmiCategory, BodyMetrics};

/// A BMI score with its classification and display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    /// The BMI score, rounded to one decimal place.
    pub score: f64,
    /// The classification band label.
    pub status: String,
    /// The display colour class for the band.
    pub color: String,
    /// The recommendation text for the band.
    pub recommendation: String,
}

/// Calculates BMI from body measurements.
///
/// Returns `None` when the required measurements are missing or not
/// positive; no error is ever raised.
///
/// - Metric: `bmi = kg / (cm / 100)^2`, requiring positive weight and
///   height.
/// - Imperial: `bmi = weight / inches^2 * 703` (the US customary formula),
///   requiring positive total inches. The weight is used exactly as
///   supplied. The original caller converts all input to kilograms and
///   centimetres before calling, so this branch is retained for callers
///   that do supply true imperial weight.
///
/// The score is rounded to one decimal place before classification, so
/// band edges are evaluated on the displayed value.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::calculate_bmi;
/// use hishab_engine::models::BodyMetrics;
///
/// let report = calculate_bmi(&BodyMetrics::Metric {
///     weight_kg: 70.0,
///     height_cm: 175.0,
/// })
/// .unwrap();
/// assert_eq!(report.score, 22.9);
/// assert_eq!(report.status, "Normal");
/// ```
pub fn calculate_bmi(metrics: &BodyMetrics) -> Option<BmiReport> {
    let bmi = match metrics {
        BodyMetrics::Metric {
            weight_kg,
            height_cm,
        } => {
            if !(*weight_kg > 0.0) || !(*height_cm > 0.0) {
                return None;
            }
            let height_m = height_cm / 100.0;
            weight_kg / (height_m * height_m)
        }
        BodyMetrics::Imperial { weight, height } => {
            let inches = height.total_inches();
            if !(*weight > 0.0) || !(inches > 0.0) {
                return None;
            }
            weight / (inches * inches) * 703.0
        }
    };

    Some(report_for(bmi))
}

/// Builds the display report for a raw BMI value.
fn report_for(bmi: f64) -> BmiReport {
    let score = (bmi * 10.0).round() / 10.0;
    let category = BmiCategory::from_score(score);

    BmiReport {
        score,
        status: category.status().to_string(),
        color: category.color().to_string(),
        recommendation: category.recommendation().to_string(),
    }
}
