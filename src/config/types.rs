//! Configuration types for the calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the admission system
//! profile table and the salary tax policy.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// The group an admission system belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionGroup {
    /// Medical colleges (MBBS/BDS).
    Medical,
    /// General public universities and clusters.
    General,
    /// Engineering universities where merit is test-only.
    Engineering,
}

/// A single admission system profile.
///
/// Each profile describes how one institution (or cluster) converts SSC and
/// HSC GPAs into admission marks, and which penalty deductions it applies.
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionProfile {
    /// The human-readable name of the system (e.g., "Dhaka University (DU)").
    pub name: String,
    /// Multiplier applied to the SSC GPA.
    pub ssc_multiplier: Decimal,
    /// Multiplier applied to the HSC GPA.
    pub hsc_multiplier: Decimal,
    /// Total marks obtainable from GPA (5 x ssc_multiplier + 5 x hsc_multiplier).
    pub total_gpa_marks: Decimal,
    /// Marks deducted for second-time candidates, where the system defines one.
    #[serde(default)]
    pub second_time_deduction: Option<Decimal>,
    /// Marks deducted for previously admitted candidates, where defined.
    #[serde(default)]
    pub prev_admitted_deduction: Option<Decimal>,
    /// Whether merit is decided purely by the admission test.
    #[serde(default)]
    pub is_engineering: bool,
    /// The group this system belongs to.
    pub group: AdmissionGroup,
    /// Optional descriptive note shown alongside results.
    #[serde(default)]
    pub note: Option<String>,
}

/// The admission system table loaded from admission.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionConfig {
    /// Map of system identifier (e.g., "du", "medical") to profile.
    pub systems: HashMap<String, AdmissionProfile>,
}

impl AdmissionConfig {
    /// Looks up a profile by system identifier.
    pub fn get(&self, id: &str) -> Option<&AdmissionProfile> {
        self.systems.get(id)
    }
}

/// A single progressive tax slab.
///
/// A slab with no `limit` is the unbounded top band.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlab {
    /// The width of this slab in Taka, or `None` for the unbounded top band.
    #[serde(default)]
    pub limit: Option<Decimal>,
    /// The tax rate applied within this slab (e.g., 0.05 for 5%).
    pub rate: Decimal,
}

/// The salary tax policy loaded from tax.yaml.
///
/// Tax is computed on annual income above the exemption threshold by
/// walking the slabs in order.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxPolicy {
    /// Annual income up to this amount is tax-free.
    pub exemption: Decimal,
    /// Progressive slabs applied to income above the exemption.
    pub slabs: Vec<TaxSlab>,
}

/// The complete calculator configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from a configuration
/// directory. The tables are immutable after loading.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Admission system profiles.
    admission: AdmissionConfig,
    /// Salary tax policy.
    tax: TaxPolicy,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(admission: AdmissionConfig, tax: TaxPolicy) -> Self {
        Self { admission, tax }
    }

    /// Returns the admission system table.
    pub fn admission(&self) -> &AdmissionConfig {
        &self.admission
    }

    /// Returns the salary tax policy.
    pub fn tax(&self) -> &TaxPolicy {
        &self.tax
    }
}
