//! Configuration loading and management for the calculation engine.
//!
//! This module provides functionality to load calculator configuration from
//! YAML files: the admission system profile table and the salary tax policy.
//! The loaded tables are immutable for the lifetime of the process.
//!
//! # Example
//!
//! ```no_run
//! use hishab_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bd").unwrap();
//! println!("Loaded {} admission systems", config.admission().systems.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdmissionConfig, AdmissionGroup, AdmissionProfile, CalculatorConfig, TaxPolicy, TaxSlab,
};
