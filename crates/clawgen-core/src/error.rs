//! Unified error handling for clawgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for clawgen core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClawgenError {
    /// Errors from the domain layer (workflow rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ClawgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in clawgen".into(),
                "Please report this issue at: https://github.com/cosecruz/clawgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Workflow => ErrorCategory::Workflow,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Workflow,
    NotFound,
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ClawgenResult<T> = Result<T, ClawgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stage;
    use std::path::PathBuf;

    #[test]
    fn domain_categories_are_mapped() {
        let err: ClawgenError = DomainError::StageOrder {
            from: Stage::Ready,
            to: Stage::Init,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Workflow);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn display_is_transparent() {
        let err: ClawgenError = ApplicationError::NotInitialized {
            root: PathBuf::from("/tmp/x"),
        }
        .into();
        assert_eq!(err.to_string(), "No clawgen state found in /tmp/x");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = res.context("reading").unwrap_err();
        assert!(matches!(err, ClawgenError::Internal { .. }));
        assert!(err.to_string().contains("reading: boom"));
    }
}
