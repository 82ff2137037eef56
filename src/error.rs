//! Error types for the CircuitLab engine.
//!
//! This module provides a unified error type [`CircuitLabError`] covering
//! parameter validation, value parsing, and result output. Statistics and
//! analyzers never fail; they report degenerate input as data instead.

use thiserror::Error;

/// Result type alias using [`CircuitLabError`].
pub type Result<T> = std::result::Result<T, CircuitLabError>;

/// Unified error type for all CircuitLab operations.
#[derive(Error, Debug)]
pub enum CircuitLabError {
    // ============ Parameter Errors ============
    /// A circuit parameter is out of its valid range
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// Resistor sweep with no resistances
    #[error("Resistor sweep requires at least one resistance")]
    EmptySweep,

    /// Astable edge list would grow past the configured limit
    #[error("Waveform needs {points} points, exceeding the limit of {limit}")]
    WaveformTooLong { points: usize, limit: usize },

    /// Mode name that names no circuit family
    #[error("Unknown circuit mode '{mode}'")]
    UnknownMode { mode: String },

    /// Text could not be parsed as an SI-suffixed number
    #[error("Invalid value '{input}' (expected a number with optional p/n/u/m/k/M/G suffix)")]
    InvalidValue { input: String },

    // ============ Output Errors ============
    /// Error writing exported results
    #[error("Failed to write output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },

    /// Error encoding or decoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CircuitLabError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(input: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = CircuitLabError::invalid_parameter("capacitance_uf", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'capacitance_uf': must be positive, got 0"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CircuitLabError = io.into();
        assert!(matches!(err, CircuitLabError::Output { .. }));
    }
}
