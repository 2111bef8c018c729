//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not workflow
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The state document could not be written or removed.
    #[error("Failed to persist state at {path}: {reason}")]
    StateStoreFailed { path: PathBuf, reason: String },

    /// An operation that needs prior state found none.
    #[error("No clawgen state found in {root}")]
    NotInitialized { root: PathBuf },

    /// Template rendering failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Reading an answer failed.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Input ended before a required answer was given.
    #[error("Input ended while waiting for: {prompt}")]
    InputExhausted { prompt: String },

    /// The project type of a directory could not be determined.
    #[error("Cannot determine project type of {path}")]
    UnknownProjectLayout { path: PathBuf },

    /// An in-memory adapter's lock was poisoned.
    #[error("Failed to acquire adapter lock")]
    StoreLockError,

    /// A generated project failed structural checks.
    #[error("{kind} project at {path} is invalid: {reason}")]
    StructureInvalid {
        kind: String,
        path: PathBuf,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::StateStoreFailed { path, .. } => vec![
                format!("Check permissions on {}", path.display()),
                "Remove the .clawgen directory to start over".into(),
            ],
            Self::NotInitialized { root } => vec![
                format!("Run `clawgen init --output {}` first", root.display()),
                "Or use `clawgen new --quick` for a one-shot scaffold".into(),
            ],
            Self::InputExhausted { .. } | Self::PromptFailed { .. } => vec![
                "Run the command in an interactive terminal".into(),
                "Or pass --quick to use defaults without prompting".into(),
            ],
            Self::UnknownProjectLayout { .. } => vec![
                "Expected SKILL.md (skill), index.ts + package.json (plugin)".into(),
                "or src/app/page.tsx / src/main.tsx (web)".into(),
            ],
            Self::StructureInvalid { .. } => vec![
                "Regenerate the project with `clawgen generate`".into(),
            ],
            Self::RenderingFailed { .. } | Self::StoreLockError => {
                vec!["This is likely a bug, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StateStoreFailed { .. } => ErrorCategory::Io,
            Self::PromptFailed { .. } | Self::InputExhausted { .. } => ErrorCategory::Io,
            Self::NotInitialized { .. } | Self::UnknownProjectLayout { .. } => {
                ErrorCategory::NotFound
            }
            Self::StructureInvalid { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
