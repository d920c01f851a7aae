//! Error types for the calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the calculation core itself never returns these errors: every
//! calculator degrades invalid input to a renderable default (`None`, a
//! zero-valued record, or a placeholder string). The error taxonomy covers
//! the surrounding layers — configuration loading and the HTTP API.

use thiserror::Error;

/// The main error type for the calculation engine.
///
/// # Example
///
/// ```
/// use hishab_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Admission system identifier was not found in the configuration.
    #[error("Admission system not found: {id}")]
    SystemNotFound {
        /// The admission system identifier that was not found.
        id: String,
    },

    /// A request contained invalid data.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of what made the request invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
