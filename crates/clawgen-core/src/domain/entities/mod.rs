pub mod directory;
pub mod file_set;
pub mod options;
pub mod project;
pub mod render_context;
pub mod state;

pub use crate::domain::DomainError;
pub use directory::DirectoryStatus;
pub use file_set::{FileSet, FileToWrite, Permissions};
pub use options::{PluginOptions, ScaffoldConfig, SkillOptions, VariantOptions, WebOptions};
pub use project::{GatewayConfig, Modules, ProjectInfo, ProjectName};
pub use render_context::RenderContext;
pub use state::{Requirements, WorkflowState};
