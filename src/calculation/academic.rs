//! GPA and CGPA aggregation, and percentage/GPA conversion.
//!
//! The aggregators consider only entries that have been filled in, giving a
//! "live" result that adjusts as the caller's form is completed. Results
//! are returned as fixed two-decimal strings; display logic renders them
//! verbatim.

use rust_decimal::Decimal;

use crate::models::{CourseEntry, GradeEntry};

use super::grade_scale::grade_point_for;
use super::numeric::fmt2;

/// Computes a simple-average GPA over the filled subject entries.
///
/// Entries without marks are excluded. When no entry has marks the result
/// is `"0.00"`; otherwise the unweighted mean of each entry's grade point,
/// formatted to two decimal places.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::compute_gpa;
/// use hishab_engine::models::GradeEntry;
/// use rust_decimal::Decimal;
///
/// let subjects = vec![
///     GradeEntry { marks: Some(Decimal::from(85)) },
///     GradeEntry { marks: Some(Decimal::from(72)) },
///     GradeEntry { marks: None },
/// ];
/// assert_eq!(compute_gpa(&subjects), "4.50");
/// ```
pub fn compute_gpa(entries: &[GradeEntry]) -> String {
    let filled: Vec<Decimal> = entries.iter().filter_map(|entry| entry.marks).collect();
    if filled.is_empty() {
        return "0.00".to_string();
    }

    let total: Decimal = filled.iter().map(|marks| grade_point_for(*marks)).sum();
    fmt2(total / Decimal::from(filled.len() as u64))
}

/// Computes a credit-weighted CGPA over the filled course entries.
///
/// Entries contribute only when both grade and credit are present. When no
/// entry qualifies, or the total credit is zero, the result is `"0.00"`;
/// otherwise `sum(grade * credit) / sum(credit)` formatted to two decimal
/// places.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::compute_cgpa;
/// use hishab_engine::models::CourseEntry;
/// use rust_decimal::Decimal;
///
/// let courses = vec![
///     CourseEntry { grade: Some(Decimal::new(40, 1)), credit: Some(Decimal::from(3)) },
///     CourseEntry { grade: Some(Decimal::new(20, 1)), credit: Some(Decimal::from(3)) },
/// ];
/// assert_eq!(compute_cgpa(&courses), "3.00");
/// ```
pub fn compute_cgpa(entries: &[CourseEntry]) -> String {
    let filled: Vec<(Decimal, Decimal)> = entries
        .iter()
        .filter_map(|entry| match (entry.grade, entry.credit) {
            (Some(grade), Some(credit)) => Some((grade, credit)),
            _ => None,
        })
        .collect();
    if filled.is_empty() {
        return "0.00".to_string();
    }

    let total_points: Decimal = filled.iter().map(|(grade, credit)| grade * credit).sum();
    let total_credits: Decimal = filled.iter().map(|(_, credit)| *credit).sum();

    if total_credits == Decimal::ZERO {
        return "0.00".to_string();
    }
    fmt2(total_points / total_credits)
}

/// Converts a percentage to a GPA on the 5.00 scale.
///
/// Absent input yields `"0.00"`. Negative input is clamped to 0, the value
/// divided by 20, and the result capped at 5.00.
pub fn percentage_to_gpa(percentage: Option<Decimal>) -> String {
    let Some(percentage) = percentage else {
        return "0.00".to_string();
    };
    let gpa = percentage.max(Decimal::ZERO) / Decimal::from(20);
    fmt2(gpa.min(Decimal::from(5)))
}

/// Converts a GPA on the 5.00 scale to a percentage.
///
/// Absent input yields `"0.00"`. Negative input is clamped to 0, the value
/// multiplied by 20, and the result capped at 100.00.
pub fn gpa_to_percentage(gpa: Option<Decimal>) -> String {
    let Some(gpa) = gpa else {
        return "0.00".to_string();
    };
    let percentage = gpa.max(Decimal::ZERO) * Decimal::from(20);
    fmt2(percentage.min(Decimal::from(100)))
}
