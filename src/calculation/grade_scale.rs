//! Grade point scale for secondary and higher secondary marks.
//!
//! This module provides the national grading step function that maps a
//! subject's marks out of 100 to a grade point on the 5.00 scale.

use rust_decimal::Decimal;

/// Maps marks out of 100 to a grade point on the 5.00 scale.
///
/// The scale is a step function with inclusive lower bounds:
///
/// | marks | point |
/// |-------|-------|
/// | >= 80 | 5.00  |
/// | >= 70 | 4.00  |
/// | >= 60 | 3.50  |
/// | >= 50 | 3.00  |
/// | >= 40 | 2.00  |
/// | >= 33 | 1.00  |
/// | < 33  | 0.00  |
///
/// Values outside [0, 100] follow the same bands; anything below 33
/// (including negatives) scores 0.00.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::grade_point_for;
/// use rust_decimal::Decimal;
///
/// assert_eq!(grade_point_for(Decimal::from(80)), Decimal::new(500, 2));
/// assert_eq!(grade_point_for(Decimal::new(799, 1)), Decimal::new(400, 2));
/// ```
pub fn grade_point_for(marks: Decimal) -> Decimal {
    if marks >= Decimal::from(80) {
        Decimal::new(500, 2)
    } else if marks >= Decimal::from(70) {
        Decimal::new(400, 2)
    } else if marks >= Decimal::from(60) {
        Decimal::new(350, 2)
    } else if marks >= Decimal::from(50) {
        Decimal::new(300, 2)
    } else if marks >= Decimal::from(40) {
        Decimal::new(200, 2)
    } else if marks >= Decimal::from(33) {
        Decimal::new(100, 2)
    } else {
        Decimal::new(0, 2)
    }
}
