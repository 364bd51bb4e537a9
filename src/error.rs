//! Error types for the calculation service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for configuration and input validation failures. The arithmetic itself
//! never fails; see [`crate::calculation::compute`].

use thiserror::Error;

/// The main error type for the calculation service.
///
/// # Example
///
/// ```
/// use calc_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
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

    /// A configuration value was present but unusable.
    #[error("Invalid configuration value '{key}': {message}")]
    InvalidConfig {
        /// The configuration key, e.g. `server.port` or `CALC_PORT`.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An operand was not supplied.
    #[error("Missing operand '{field}'")]
    MissingOperand {
        /// The name of the missing operand.
        field: String,
    },

    /// An operand was supplied but is not a number.
    #[error("Invalid operand '{field}': '{value}' is not a number")]
    InvalidOperand {
        /// The name of the operand.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_key_and_message() {
        let error = EngineError::InvalidConfig {
            key: "CALC_PORT".to_string(),
            message: "must be a number between 1 and 65535".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'CALC_PORT': must be a number between 1 and 65535"
        );
    }

    #[test]
    fn test_missing_operand_displays_field() {
        let error = EngineError::MissingOperand {
            field: "b".to_string(),
        };
        assert_eq!(error.to_string(), "Missing operand 'b'");
    }

    #[test]
    fn test_invalid_operand_displays_field_and_value() {
        let error = EngineError::InvalidOperand {
            field: "a".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid operand 'a': 'abc' is not a number");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_operand() -> EngineResult<()> {
            Err(EngineError::MissingOperand {
                field: "a".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_operand()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
