//! Infrastructure adapters for clawgen.
//!
//! This crate implements the ports defined in `clawgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod elicitor;
pub mod filesystem;
pub mod renderer;
pub mod state_store;

// Re-export commonly used adapters
pub use elicitor::{LineElicitor, ScriptedElicitor};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::VariantRenderer;
pub use state_store::{JsonStateStore, MemoryStateStore};
