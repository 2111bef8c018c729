//! clawgen core - hexagonal architecture for a staged project scaffolder.
//!
//! This crate provides the domain and application layers for the clawgen
//! OpenClaw scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           clawgen-cli (CLI)             │
//! │   new / init / prd / generate / ...     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (WorkflowService, ConfigCollector)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Filesystem, StateStore, Renderer,       │
//! │ Elicitor                                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    clawgen-adapters (Infrastructure)    │
//! │ LocalFilesystem, JsonStateStore, ...    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ WorkflowState, Stage, FileSet           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clawgen_core::application::{CollectorDefaults, FlowOptions, WorkflowService};
//! use clawgen_core::domain::ProjectKind;
//!
//! let service = WorkflowService::new(filesystem, store, renderer);
//! let flags = FlowOptions { quick: true, kind: Some(ProjectKind::Skill) };
//! service.run_new("./out".as_ref(), flags, &mut elicitor, &CollectorDefaults::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CollectorDefaults, FlowOptions, GenerationReport, InitReport, Outcome, StructureReport,
        WorkflowService,
        ports::{Elicitor, Filesystem, StateStore, TemplateRenderer},
    };
    pub use crate::domain::{
        FileSet, ProjectKind, ScaffoldConfig, Stage, TechStack, VariantOptions, WorkflowState,
    };
    pub use crate::error::{ClawgenError, ClawgenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
