//! Error types for the TimeTrack engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation,
//! access checks and configuration loading.

use thiserror::Error;

/// The main error type for the TimeTrack engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timetrack_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedScheme {
///     salary_type: "piecework".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported salary type: piecework");
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

    /// The salary type does not name one of the known pay schemes.
    #[error("Unsupported salary type: {salary_type}")]
    UnsupportedScheme {
        /// The salary type that was requested.
        salary_type: String,
    },

    /// A numeric argument was outside its permitted domain.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// The name of the argument.
        name: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee with the given identifier exists in the directory.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A string could not be parsed as a dotted-quad IPv4 address.
    #[error("Invalid IPv4 address: '{input}'")]
    InvalidIpAddress {
        /// The rejected input.
        input: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(name: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
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
    fn test_unsupported_scheme_displays_salary_type() {
        let error = EngineError::UnsupportedScheme {
            salary_type: "unknown".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported salary type: unknown");
    }

    #[test]
    fn test_invalid_argument_helper() {
        let error = EngineError::invalid_argument("total_days_in_month", "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Invalid argument 'total_days_in_month': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "hourly_rate".to_string(),
            message: "required for hourly pay scheme".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'hourly_rate': required for hourly pay scheme"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "emp_404".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: emp_404");
    }

    #[test]
    fn test_invalid_ip_displays_input() {
        let error = EngineError::InvalidIpAddress {
            input: "abc.1.1.1".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid IPv4 address: 'abc.1.1.1'");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unsupported() -> EngineResult<()> {
            Err(EngineError::UnsupportedScheme {
                salary_type: "barter".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unsupported()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::UnsupportedScheme { .. })
        ));
    }
}
