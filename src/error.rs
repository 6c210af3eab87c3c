//! Error types for the settlement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during settlement.

use thiserror::Error;

use crate::calculation::ValidationReport;

/// The main error type for the settlement engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use recargo_engine::error::EngineError;
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

    /// Salary tier name was not found in the configuration.
    #[error("Salary tier not found: {name}")]
    TierNotFound {
        /// The tier name that was not found.
        name: String,
    },

    /// A clock time did not match the `HH:mm` pattern.
    #[error("Invalid time value '{value}' for {field}")]
    InvalidTimeValue {
        /// The field the value was supplied for.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// One or more days failed shift validation; settlement was refused.
    #[error("{}", .report.summary())]
    ValidationFailed {
        /// The per-day validation report.
        report: ValidationReport,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
