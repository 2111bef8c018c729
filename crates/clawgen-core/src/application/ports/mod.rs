//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `clawgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `StateStore`: Workflow state persistence
//!   - `TemplateRenderer`: Variant rendering
//!   - `Elicitor`: Questions to the user

pub mod output;

pub use output::{Elicitor, Filesystem, StateStore, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockStateStore};
