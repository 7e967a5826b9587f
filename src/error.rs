//! Error types for the payroll rule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::RuleMode;

/// The main error type for the payroll rule engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/company.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule file not found: /missing/company.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rule configuration file was not found at the specified path.
    #[error("Rule file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A rule configuration file could not be parsed.
    #[error("Failed to parse rule file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule set contained an invalid value.
    #[error("Invalid {mode} rules: {message}")]
    InvalidRules {
        /// The rule mode the invalid value belongs to.
        mode: RuleMode,
        /// A description of what made the rules invalid.
        message: String,
    },

    /// No rule set is loaded for the requested mode.
    ///
    /// This is a blocking precondition: the engine never substitutes a
    /// default rule set, because defaults would silently change pay.
    #[error("Payroll rules unavailable for {mode} mode")]
    RulesUnavailable {
        /// The rule mode that was requested.
        mode: RuleMode,
    },

    /// The clock-out timestamp is not strictly after the clock-in timestamp.
    #[error("Invalid interval: clock-out {clock_out} is not after clock-in {clock_in}")]
    InvalidInterval {
        /// The clock-in timestamp.
        clock_in: NaiveDateTime,
        /// The clock-out timestamp.
        clock_out: NaiveDateTime,
    },

    /// A timecard entry was used in a way its lifecycle does not allow.
    #[error("Invalid timecard '{entry_id}': {message}")]
    InvalidTimecard {
        /// The ID of the offending timecard entry.
        entry_id: String,
        /// A description of the lifecycle violation.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
