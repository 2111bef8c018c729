//! Workflow state persistence adapters.

mod json;
mod memory;

pub use json::JsonStateStore;
pub use memory::MemoryStateStore;
