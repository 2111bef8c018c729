//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `clawgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{
    ChoiceQuestion, ConfirmQuestion, FileSet, ProjectKind, ScaffoldConfig, TextQuestion,
    WorkflowState,
};
use crate::error::ClawgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `clawgen_adapters::filesystem::LocalFilesystem` (production)
/// - `clawgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ClawgenResult<()>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> ClawgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ClawgenResult<String>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> ClawgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the direct children of a directory, sorted.
    fn list_dir(&self, path: &Path) -> ClawgenResult<Vec<String>>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ClawgenResult<()>;
}

/// Port for the durable workflow state document.
///
/// Implemented by:
/// - `clawgen_adapters::state_store::JsonStateStore` (production)
/// - `clawgen_adapters::state_store::MemoryStateStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait StateStore: Send + Sync {
    /// Load the state kept for `root`.
    ///
    /// A missing or unreadable document is "no prior state": `None`, never an
    /// error.
    fn load(&self, root: &Path) -> Option<WorkflowState>;

    /// Persist the complete document, replacing any previous one.
    fn save(&self, root: &Path, state: &WorkflowState) -> ClawgenResult<()>;

    /// Remove all state kept for `root`.
    fn clear(&self, root: &Path) -> ClawgenResult<()>;
}

/// Port for variant rendering.
///
/// Implementations must be pure: equal arguments yield equal file sets.
///
/// Implemented by:
/// - `clawgen_adapters::renderer::VariantRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render the file set of `kind` for `config`.
    fn render(&self, kind: ProjectKind, config: &ScaffoldConfig) -> ClawgenResult<FileSet>;
}

/// Port for asking the user questions.
///
/// Implemented by:
/// - `clawgen_adapters::elicitor::LineElicitor` (terminal, line by line)
/// - `clawgen_adapters::elicitor::ScriptedElicitor` (replays answers in tests)
pub trait Elicitor {
    /// Ask for free text until an acceptable answer is given.
    fn text(&mut self, question: &TextQuestion) -> ClawgenResult<String>;

    /// Ask a yes/no question until an acceptable answer is given.
    fn confirm(&mut self, question: &ConfirmQuestion) -> ClawgenResult<bool>;

    /// Ask to pick one option; returns its index.
    fn choice(&mut self, question: &ChoiceQuestion) -> ClawgenResult<usize>;

    /// Show informational text between questions.
    fn note(&mut self, _message: &str) -> ClawgenResult<()> {
        Ok(())
    }
}
