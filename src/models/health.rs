//! Body measurement models for BMI calculation.
//!
//! This module defines the unit-tagged body metrics input and the BMI
//! classification bands with their fixed display attributes.

use serde::{Deserialize, Serialize};

/// Body measurements, tagged by unit system.
///
/// # Example
///
/// ```
/// use hishab_engine::models::BodyMetrics;
///
/// let metrics: BodyMetrics = serde_json::from_str(
///     r#"{"unit": "metric", "weight_kg": 70.0, "height_cm": 175.0}"#,
/// ).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum BodyMetrics {
    /// Weight in kilograms, height in centimetres.
    Metric {
        /// Body weight in kilograms.
        weight_kg: f64,
        /// Height in centimetres.
        height_cm: f64,
    },
    /// Weight in pounds, height in feet/inches (or total inches).
    Imperial {
        /// Body weight in pounds.
        weight: f64,
        /// Height, either as feet and inches or as total inches.
        height: ImperialHeight,
    },
}

/// Imperial height, accepted either as `{feet, inches}` or a flat total
/// inches number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImperialHeight {
    /// Height split into feet and inches; missing components default to 0.
    FeetInches {
        /// Whole feet component.
        #[serde(default)]
        feet: f64,
        /// Remaining inches component.
        #[serde(default)]
        inches: f64,
    },
    /// Height as total inches.
    TotalInches(f64),
}

impl ImperialHeight {
    /// Returns the height as total inches.
    pub fn total_inches(&self) -> f64 {
        match self {
            ImperialHeight::FeetInches { feet, inches } => feet * 12.0 + inches,
            ImperialHeight::TotalInches(total) => *total,
        }
    }
}

/// A BMI classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 to 24.9.
    Normal,
    /// BMI from 25 to 29.9.
    Overweight,
    /// BMI of 30 or above.
    Obese,
}

impl BmiCategory {
    /// Classifies a BMI score already rounded to one decimal place.
    pub fn from_score(score: f64) -> Self {
        if score < 18.5 {
            BmiCategory::Underweight
        } else if score <= 24.9 {
            BmiCategory::Normal
        } else if score <= 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// The display label for this band.
    pub fn status(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// The display colour class for this band.
    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "text-blue-500",
            BmiCategory::Normal => "text-emerald-500",
            BmiCategory::Overweight => "text-amber-500",
            BmiCategory::Obese => "text-red-500",
        }
    }

    /// The recommendation text for this band.
    pub fn recommendation(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider consulting a nutritionist to gain weight healthily."
            }
            BmiCategory::Normal => {
                "Great job! Maintain your balanced diet and exercise routine."
            }
            BmiCategory::Overweight => {
                "Aim for regular physical activity and a balanced diet."
            }
            BmiCategory::Obese => {
                "Please consult a healthcare provider for professional advice."
            }
        }
    }
}
