//! State document as pretty JSON under `<root>/.clawgen/state.json`.

use std::path::{Path, PathBuf};

use clawgen_core::{
    application::{ApplicationError, ports::StateStore},
    domain::{
        WorkflowState,
        entities::state::{STATE_DIR, STATE_FILE},
    },
    error::{ClawgenError, ClawgenResult},
};
use tracing::{debug, instrument, warn};

/// Production state store on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStateStore;

impl JsonStateStore {
    pub fn new() -> Self {
        Self
    }

    pub fn state_dir(root: &Path) -> PathBuf {
        root.join(STATE_DIR)
    }

    pub fn state_path(root: &Path) -> PathBuf {
        Self::state_dir(root).join(STATE_FILE)
    }
}

fn store_error(path: &Path, reason: impl std::fmt::Display) -> ClawgenError {
    ApplicationError::StateStoreFailed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

impl StateStore for JsonStateStore {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn load(&self, root: &Path) -> Option<WorkflowState> {
        let path = Self::state_path(root);
        if !path.exists() {
            debug!("No state document");
            return None;
        }

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable state, starting fresh");
                return None;
            }
        };

        match serde_json::from_str::<WorkflowState>(&raw) {
            Ok(state) => {
                debug!(stage = %state.stage, "State loaded");
                Some(state)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corrupt state, starting fresh");
                None
            }
        }
    }

    #[instrument(skip_all, fields(root = %root.display(), stage = %state.stage))]
    fn save(&self, root: &Path, state: &WorkflowState) -> ClawgenResult<()> {
        let dir = Self::state_dir(root);
        std::fs::create_dir_all(&dir).map_err(|e| store_error(&dir, e))?;

        let path = dir.join(STATE_FILE);
        let mut json = serde_json::to_string_pretty(state).map_err(|e| store_error(&path, e))?;
        json.push('\n');
        std::fs::write(&path, json).map_err(|e| store_error(&path, e))?;
        debug!(path = %path.display(), "State saved");
        Ok(())
    }

    fn clear(&self, root: &Path) -> ClawgenResult<()> {
        let dir = Self::state_dir(root);
        if dir.exists() {
            std::fs::remove_dir_all(&dir).map_err(|e| store_error(&dir, e))?;
        }
        Ok(())
    }
}
