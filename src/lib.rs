//! Calculation engine for everyday Bangladeshi calculators.
//!
//! This crate provides the pure calculation core behind a suite of localized
//! calculators — Zakat assessment, DPS/FDR/EMI finance instruments, GPA/CGPA
//! and grade conversion, university admission scoring, gold valuation, BMI,
//! age decomposition, and progressive salary tax — together with an HTTP API
//! for invoking each calculator.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
