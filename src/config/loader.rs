//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AdmissionConfig, AdmissionProfile, CalculatorConfig, TaxPolicy};

/// Loads and provides access to the calculator configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query admission system profiles and the tax policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/bd/
/// ├── admission.yaml  # Admission system profiles
/// └── tax.yaml        # Salary tax exemption and slabs
/// ```
///
/// # Example
///
/// ```no_run
/// use hishab_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bd").unwrap();
///
/// let profile = loader.get_system("du").unwrap();
/// println!("System: {}", profile.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/bd")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hishab_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/bd")?;
    /// # Ok::<(), hishab_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let admission_path = path.join("admission.yaml");
        let admission = Self::load_yaml::<AdmissionConfig>(&admission_path)?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxPolicy>(&tax_path)?;

        Ok(Self {
            config: CalculatorConfig::new(admission, tax),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the complete loaded configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the admission system table.
    pub fn admission(&self) -> &AdmissionConfig {
        self.config.admission()
    }

    /// Returns the salary tax policy.
    pub fn tax(&self) -> &TaxPolicy {
        self.config.tax()
    }

    /// Looks up an admission system profile by identifier.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SystemNotFound` if the identifier is unknown.
    pub fn get_system(&self, id: &str) -> EngineResult<&AdmissionProfile> {
        self.config
            .admission()
            .get(id)
            .ok_or_else(|| EngineError::SystemNotFound { id: id.to_string() })
    }
}
