//! In-memory state store for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use clawgen_core::{
    application::{ApplicationError, ports::StateStore},
    domain::WorkflowState,
    error::ClawgenResult,
};

/// Keeps one document per root. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    documents: Arc<RwLock<HashMap<PathBuf, WorkflowState>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, as if an earlier run had saved it.
    pub fn with_state(self, root: impl Into<PathBuf>, state: WorkflowState) -> Self {
        if let Ok(mut documents) = self.documents.write() {
            documents.insert(root.into(), state);
        }
        self
    }

    pub fn get(&self, root: &Path) -> Option<WorkflowState> {
        self.load(root)
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, root: &Path) -> Option<WorkflowState> {
        self.documents.read().ok()?.get(root).cloned()
    }

    fn save(&self, root: &Path, state: &WorkflowState) -> ClawgenResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        documents.insert(root.to_path_buf(), state.clone());
        Ok(())
    }

    fn clear(&self, root: &Path) -> ClawgenResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        documents.remove(root);
        Ok(())
    }
}
