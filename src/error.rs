//! Error types for the insured client registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading from the console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Input was closed (end of input or interrupt); no further prompts
    /// can be answered.
    #[error("Console input closed")]
    Closed,

    /// Underlying I/O failure
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-layer failure
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors that can occur while coordinating a user turn.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    /// A menu dispatch value outside 1-4 reached the coordinator. The
    /// presentation layer filters these, so this indicates a contract
    /// violation between components, not a user-input problem.
    #[error("Menu choice out of range 1-4: {0}")]
    ChoiceOutOfRange(u32),

    /// Console failure during a dialog
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Convenience type alias for Results with CoordinatorError
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "REGISTRY_SEED_DEMO".to_string(),
            reason: "Must be a boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for REGISTRY_SEED_DEMO: Must be a boolean"
        );

        let err = ConsoleError::Closed;
        assert_eq!(err.to_string(), "Console input closed");

        let err = CoordinatorError::ChoiceOutOfRange(9);
        assert_eq!(err.to_string(), "Menu choice out of range 1-4: 9");
    }

    #[test]
    fn test_console_error_wraps_into_coordinator_error() {
        let err = CoordinatorError::from(ConsoleError::Closed);
        assert_eq!(err.to_string(), "Console input closed");
    }
}
