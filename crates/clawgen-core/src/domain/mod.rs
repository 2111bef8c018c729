//! Core domain layer for clawgen.
//!
//! Pure workflow logic: no filesystem, no terminal, no clock. Everything that
//! touches the outside world goes through ports in the application layer.
//!
//! - **Value objects**: closed enumerations (variant, database, stack, ...)
//! - **Entities**: the persisted [`WorkflowState`], rendered [`FileSet`]
//! - **Stage guard**: legal stage transitions
//! - **Questions**: typed prompts and their input policies

pub mod entities;
pub mod error;
pub mod question;
pub mod stage;
pub mod value_objects;

mod validation;

pub use entities::{
    DirectoryStatus, FileSet, FileToWrite, GatewayConfig, Modules, Permissions, PluginOptions,
    ProjectInfo, ProjectName, RenderContext, Requirements, ScaffoldConfig, SkillOptions,
    VariantOptions, WebOptions, WorkflowState,
};
pub use error::{DomainError, ErrorCategory};
pub use question::{ChoiceQuestion, ConfirmQuestion, TextQuestion};
pub use stage::{ResumeDecision, Stage, StageGuard};
pub use validation::DomainValidator;
pub use value_objects::{
    Database, DesignStyle, OAuthProvider, PluginType, ProjectKind, SkillTrigger, TechStack,
};
