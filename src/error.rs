//! Error types for the hours engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! reading attendance data and preparing an aggregation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the hours engine.
///
/// The aggregation itself is infallible; these errors are raised at its
/// boundary (configuration, input parsing, data access, interval checks).
///
/// # Example
///
/// ```
/// use hours_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A school year string did not match `YYYY-YYYY` or described an empty range.
    #[error("Invalid school year '{value}': {message}")]
    InvalidSchoolYear {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// A user id was missing or not a positive integer.
    #[error("Invalid user ID: '{value}'")]
    InvalidUserId {
        /// The rejected input.
        value: String,
    },

    /// An attendance record or one of its breaks ends before it starts.
    #[error("Invalid interval on {date}: {message}")]
    InvalidInterval {
        /// The date of the offending attendance record.
        date: NaiveDate,
        /// Which interval was inverted.
        message: String,
    },

    /// The attendance store could not serve the request.
    #[error("Data access error: {message}")]
    DataAccess {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
