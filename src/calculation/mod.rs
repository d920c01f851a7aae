//! Calculation logic for the calculator suite.
//!
//! This module contains all the calculation functions: the grade point
//! scale, GPA/CGPA aggregation and percentage conversion, university
//! admission scoring, DPS/FDR/EMI finance instruments, gold valuation,
//! BMI classification, calendar age decomposition, progressive salary tax,
//! and Zakat assessment.
//!
//! Every function is pure and synchronous: the same input always produces
//! the same output, invalid input degrades to a renderable default rather
//! than an error, and no state is retained between calls.

mod academic;
mod admission;
mod age;
mod bmi;
mod dps;
mod emi;
mod fdr;
mod gold;
mod grade_scale;
mod numeric;
mod salary_tax;
mod zakat;

pub use academic::{compute_cgpa, compute_gpa, gpa_to_percentage, percentage_to_gpa};
pub use admission::{AdmissionOptions, AdmissionScore, score_admission};
pub use age::{AgeBreakdown, age_between, calculate_age};
pub use bmi::{BmiReport, calculate_bmi};
pub use dps::{DpsResult, calculate_dps};
pub use emi::{EmiResult, calculate_emi};
pub use fdr::{FdrResult, calculate_fdr};
pub use gold::{gold_value, purity_factor};
pub use grade_scale::grade_point_for;
pub use salary_tax::calculate_salary_tax;
pub use zakat::{ZakatAssessment, assess_zakat, zakat_rate};
