//! Error handling for the sift crates.

use thiserror::Error;

/// Error type shared by every fallible sift operation.
///
/// Each variant carries a human readable message and an optional source,
/// so callers get a full error chain when something underneath failed
/// (for example a configuration document that does not parse).
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Empty input: {message}")]
    EmptyInput {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Result type alias for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;

/// Error severity levels for categorizing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The call failed but the caller's state is untouched
    Low,
    /// The call failed and the caller must change its input
    Medium,
    /// Setup failed; nothing built on top of it can proceed
    High,
}

/// Error category for grouping related error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A precondition on an argument was violated
    Precondition,
    /// Configuration and setup errors
    Configuration,
}

/// Trait for error diagnostics with context and suggestions.
pub trait Diagnose {
    /// Get the error severity level.
    fn severity(&self) -> ErrorSeverity;

    /// Get the error category.
    fn category(&self) -> ErrorCategory;

    /// Get additional context about the error.
    fn context(&self) -> Vec<String>;

    /// Get suggestions for resolving the error.
    fn suggestions(&self) -> Vec<String>;

    /// Check if the error is retryable.
    fn is_retryable(&self) -> bool;
}

impl SiftError {
    /// Create an invalid argument error with a custom message.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            source: None,
        }
    }

    /// Create an empty input error with a custom message.
    pub fn empty_input<S: Into<String>>(message: S) -> Self {
        Self::EmptyInput {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a custom message.
    pub fn configuration_error<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a custom message and source error.
    pub fn configuration_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The message the error was created with, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            SiftError::InvalidArgument { message, .. }
            | SiftError::EmptyInput { message, .. }
            | SiftError::Configuration { message, .. } => message,
        }
    }
}

impl Diagnose for SiftError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SiftError::InvalidArgument { .. } => ErrorSeverity::Medium,
            SiftError::EmptyInput { .. } => ErrorSeverity::Low,
            SiftError::Configuration { .. } => ErrorSeverity::High,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            SiftError::InvalidArgument { .. } | SiftError::EmptyInput { .. } => {
                ErrorCategory::Precondition
            }
            SiftError::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    fn context(&self) -> Vec<String> {
        let mut context = Vec::new();

        match self {
            SiftError::InvalidArgument { message, .. } => {
                context.push(format!("Argument check context: {}", message));
            }
            SiftError::EmptyInput { message, .. } => {
                context.push(format!("Input check context: {}", message));
                context.push("The operation has no identity value to return".to_string());
            }
            SiftError::Configuration { message, .. } => {
                context.push(format!("Configuration context: {}", message));
            }
        }

        if let Some(source) = self.source_chain_root() {
            context.push(format!("Caused by: {}", source));
        }

        context
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            SiftError::InvalidArgument { .. } => {
                vec!["Pass a size and step of at least 1".to_string()]
            }
            SiftError::EmptyInput { .. } => vec![
                "Check that the sequence is non-empty before reducing".to_string(),
                "Use fold with an explicit initial value instead".to_string(),
            ],
            SiftError::Configuration { .. } => vec![
                "Verify the configuration document against MemoConfig".to_string(),
            ],
        }
    }

    fn is_retryable(&self) -> bool {
        // Every operation is deterministic in its inputs.
        false
    }
}

impl SiftError {
    fn source_chain_root(&self) -> Option<&anyhow::Error> {
        match self {
            SiftError::InvalidArgument { source, .. }
            | SiftError::EmptyInput { source, .. }
            | SiftError::Configuration { source, .. } => source.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_variant_prefix() {
        let err = SiftError::invalid_argument("size must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument: size must be positive, got 0"
        );
        assert_eq!(err.message(), "size must be positive, got 0");

        let err = SiftError::empty_input("reduce called on an empty sequence");
        assert_eq!(
            err.to_string(),
            "Empty input: reduce called on an empty sequence"
        );
    }

    #[test]
    fn test_error_with_source_keeps_chain() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SiftError::configuration_error_with_source("bad memo config", parse_err);

        assert!(err.source().is_some());
        assert!(
            err.context()
                .iter()
                .any(|line| line.starts_with("Caused by:"))
        );
    }

    #[test]
    fn test_diagnostics() {
        let err = SiftError::invalid_argument("step must be positive, got 0");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Precondition);
        assert!(!err.is_retryable());
        assert!(!err.suggestions().is_empty());

        let err = SiftError::configuration_error("initial capacity too large");
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_empty_input_context() {
        let err = SiftError::empty_input("reduce called on an empty sequence");
        let context = err.context();
        assert_eq!(context.len(), 2);
        assert!(context[0].contains("reduce called on an empty sequence"));
    }
}
