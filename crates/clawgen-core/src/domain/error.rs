// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::stage::Stage;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{raw}': {reason}")]
    InvalidProjectName { raw: String, reason: String },

    #[error("Unknown {field} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("Duplicate path in file set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Rendered file set is empty")]
    EmptyFileSet,

    #[error("No rendered file at {path}")]
    MissingFile { path: String },

    // ========================================================================
    // Workflow Errors
    // ========================================================================
    #[error("Cannot move from stage '{from}' to '{to}'")]
    StageOrder { from: Stage, to: Stage },

    #[error("Generation is not allowed at stage '{stage}' without quick mode")]
    GenerationNotAllowed { stage: Stage },

    #[error("Variant '{requested}' does not match configured options for '{configured}'")]
    VariantMismatch {
        requested: String,
        configured: String,
    },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use letters and digits; other characters become hyphens".into(),
                "Examples: my-skill, weather-bot, notes2".into(),
            ],
            Self::UnknownVariant {
                field, expected, ..
            } => vec![
                format!("Valid values for {field}: {expected}"),
                "Values are matched case-insensitively".into(),
            ],
            Self::StageOrder { from, .. } => vec![
                format!("Current stage is '{from}'"),
                "Stages advance init -> prd -> generating -> ready".into(),
                "Use `clawgen new` and choose 'restart' to start over".into(),
            ],
            Self::GenerationNotAllowed { .. } => vec![
                "Run `clawgen prd` to define requirements first".into(),
                "Or pass --quick to generate with defaults".into(),
            ],
            Self::VariantMismatch { configured, .. } => vec![
                format!("This project is configured as '{configured}'"),
                format!("Pass --type {configured}, or restart to change the type"),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("'{field}' has not been collected yet"),
                "Run `clawgen init` or use --quick to fill defaults".into(),
            ],
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::MissingFile { .. }
            | Self::EmptyFileSet => vec![
                "The renderer produced an invalid file set".into(),
                "This is likely a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::UnknownVariant { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::StageOrder { .. }
            | Self::GenerationNotAllowed { .. }
            | Self::VariantMismatch { .. } => ErrorCategory::Workflow,
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::MissingFile { .. }
            | Self::EmptyFileSet => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Workflow,
    Internal,
}
