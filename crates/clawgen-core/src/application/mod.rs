//! Application layer for clawgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (WorkflowService, ConfigCollector)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Stage rules and invariants live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CollectorDefaults, ConfigCollector, FlowOptions, GenerationReport, InitReport, Outcome,
    StructureReport, WorkflowService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Elicitor, Filesystem, StateStore, TemplateRenderer};

pub use error::ApplicationError;
