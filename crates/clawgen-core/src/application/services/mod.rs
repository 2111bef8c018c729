//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level flows: collect configuration, checkpoint state, generate and
//! validate a project.

pub mod collector;
pub mod notes;
pub mod structure_check;
pub mod workflow_service;

pub use collector::{CollectorDefaults, ConfigCollector, capability_overview};
pub use structure_check::{StructureChecker, StructureReport};
pub use workflow_service::{
    FlowOptions, GenerationReport, InitReport, Outcome, WorkflowService,
};
