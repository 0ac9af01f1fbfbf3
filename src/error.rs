//! Error types for the Compensation Simulation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculators themselves are total functions and never fail; errors
//! only arise while loading configuration or translating API requests.

use thiserror::Error;

/// The main error type for the Compensation Simulation Engine.
///
/// # Example
///
/// ```
/// use clt_engine::error::EngineError;
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

    /// A configured tier schedule was inconsistent (e.g., non-increasing limits).
    #[error("Invalid tier schedule '{schedule}': {message}")]
    InvalidSchedule {
        /// The schedule name ("contribution" or "income_tax").
        schedule: String,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// An unknown contractor tax regime was requested.
    #[error("Unknown contractor regime: {regime}")]
    UnknownRegime {
        /// The regime code that was not found in the configuration.
        regime: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
