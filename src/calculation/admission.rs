//! University admission mark scoring.
//!
//! This module converts SSC and HSC GPAs into admission marks under a named
//! system profile, applies the system's penalty deductions, and reports the
//! result as display-ready strings. Engineering systems score merit purely
//! on the admission test and return a fixed sentinel result instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{AdmissionConfig, AdmissionProfile};

use super::numeric::{fmt1, fmt2};

/// Candidate circumstances that can attract deductions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionOptions {
    /// The candidate is sitting the test for a second time.
    #[serde(default)]
    pub is_second_timer: bool,
    /// The candidate was previously admitted elsewhere.
    #[serde(default)]
    pub is_prev_admitted: bool,
}

/// The scored admission result.
///
/// All numeric fields are pre-formatted strings: two decimal places for
/// marks, one for the percentage. Engineering systems return the fixed
/// sentinel values `"N/A"`, `"Exam Only"`, and `"100% Test"` since GPA does
/// not contribute to merit there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionScore {
    /// Whether the system scores merit purely on the admission test.
    pub is_engineering: bool,
    /// GPA marks earned, before deductions.
    pub earned: String,
    /// Marks lost against the maximum.
    pub lost: String,
    /// Maximum marks obtainable from GPA.
    pub max: String,
    /// Total deduction applied.
    pub deduction: String,
    /// Final GPA score after deductions, floored at zero.
    pub final_gpa_score: String,
    /// Earned marks as a percentage of the maximum, computed before
    /// deductions.
    pub percentage: String,
    /// Explanatory note, where the system carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Scores a candidate's GPAs under the named admission system.
///
/// Returns `None` when `system_id` does not match a profile in the
/// configuration. For engineering systems a fixed sentinel result is
/// returned; otherwise:
///
/// - `earned = ssc_gpa * ssc_multiplier + hsc_gpa * hsc_multiplier`
/// - `max = 5 * ssc_multiplier + 5 * hsc_multiplier`
/// - `lost = max - earned`
/// - deductions accumulate additively from the profile's
///   `second_time_deduction` and `prev_admitted_deduction` when the
///   matching option is set and the profile defines the deduction
/// - `final_gpa_score = max(0, earned - deduction)`
///
/// The percentage is computed from the pre-deduction earned marks, so
/// deductions never affect it; systems with a zero maximum report the
/// literal `"100"`. Both behaviours are preserved contracts.
///
/// # Examples
///
/// ```no_run
/// use hishab_engine::calculation::{score_admission, AdmissionOptions};
/// use hishab_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/bd").unwrap();
/// let score = score_admission(
///     Decimal::from(5),
///     Decimal::from(5),
///     "du",
///     &AdmissionOptions::default(),
///     loader.admission(),
/// )
/// .unwrap();
/// assert_eq!(score.earned, "20.00");
/// ```
pub fn score_admission(
    ssc_gpa: Decimal,
    hsc_gpa: Decimal,
    system_id: &str,
    options: &AdmissionOptions,
    config: &AdmissionConfig,
) -> Option<AdmissionScore> {
    let profile = config.get(system_id)?;

    if profile.is_engineering {
        return Some(engineering_sentinel());
    }

    let earned = ssc_gpa * profile.ssc_multiplier + hsc_gpa * profile.hsc_multiplier;
    let max = Decimal::from(5) * profile.ssc_multiplier + Decimal::from(5) * profile.hsc_multiplier;
    let lost = max - earned;

    let mut deduction = Decimal::ZERO;
    if options.is_second_timer {
        if let Some(amount) = profile.second_time_deduction {
            deduction += amount;
        }
    }
    if options.is_prev_admitted {
        if let Some(amount) = profile.prev_admitted_deduction {
            deduction += amount;
        }
    }

    let final_score = (earned - deduction).max(Decimal::ZERO);

    // Percentage reflects pre-deduction earned marks.
    let percentage = if max > Decimal::ZERO {
        fmt1(earned / max * Decimal::from(100))
    } else {
        "100".to_string()
    };

    Some(AdmissionScore {
        is_engineering: false,
        earned: fmt2(earned),
        lost: fmt2(lost),
        max: fmt2(max),
        deduction: fmt2(deduction),
        final_gpa_score: fmt2(final_score),
        percentage,
        note: None,
    })
}

/// The fixed result for test-only engineering systems.
fn engineering_sentinel() -> AdmissionScore {
    AdmissionScore {
        is_engineering: true,
        earned: "N/A".to_string(),
        lost: "N/A".to_string(),
        max: "Exam Only".to_string(),
        deduction: "0.00".to_string(),
        final_gpa_score: "100% Test".to_string(),
        percentage: "N/A".to_string(),
        note: Some(
            "Engineering merit is calculated purely on the Admission Test score. \
             GPA is used for Eligibility and Shortlisting (top candidates)."
                .to_string(),
        ),
    }
}
