//! Academic entry models.
//!
//! This module defines the entry types consumed by the GPA and CGPA
//! aggregators. Both types model "not yet entered" explicitly with `Option`
//! so that a blank form row is distinguished from an entered zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single subject row in a GPA calculation.
///
/// Entries without marks are excluded from aggregation, which gives the
/// caller live results while a form is being filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    /// Marks obtained in the subject, in [0, 100]. `None` when not entered.
    #[serde(default)]
    pub marks: Option<Decimal>,
}

/// A single course row in a CGPA calculation.
///
/// An entry contributes to the weighted aggregate only when both the grade
/// point and the credit are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// The grade point achieved for the course. `None` when not entered.
    #[serde(default)]
    pub grade: Option<Decimal>,
    /// The credit weight of the course. Expected positive, not enforced.
    #[serde(default)]
    pub credit: Option<Decimal>,
}
