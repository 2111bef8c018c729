//! Workflow stages and the guard that orders them.
//!
//! Stage order is the declared sequence `init -> prd -> generating -> ready`,
//! exposed through [`Stage::rank`]. Nothing here compares stage *names*:
//! `"prd" < "ready"` happens to hold alphabetically, `"generating" < "init"`
//! does too, and neither says anything about the workflow.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A checkpoint in the workflow's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Project basics are being (or have been) collected.
    #[default]
    Init,
    /// Requirements have been collected.
    Prd,
    /// Files are being written; a crash here leaves this stage behind.
    Generating,
    /// Generation completed.
    Ready,
}

impl Stage {
    /// All stages in workflow order.
    pub const ORDER: [Stage; 4] = [Self::Init, Self::Prd, Self::Generating, Self::Ready];

    /// Position in the workflow. The only basis for comparing stages.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Init => 0,
            Self::Prd => 1,
            Self::Generating => 2,
            Self::Ready => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Prd => "prd",
            Self::Generating => "generating",
            Self::Ready => "ready",
        }
    }

    /// The next stage in the forward sequence, if any.
    pub fn next(self) -> Option<Stage> {
        Self::ORDER.get(usize::from(self.rank()) + 1).copied()
    }
}

impl PartialOrd for Stage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "init" => Ok(Self::Init),
            "prd" => Ok(Self::Prd),
            "generating" => Ok(Self::Generating),
            "ready" => Ok(Self::Ready),
            other => Err(DomainError::UnknownVariant {
                field: "stage",
                value: other.to_string(),
                expected: "init, prd, generating, ready".into(),
            }),
        }
    }
}

// ── Resume decision ───────────────────────────────────────────────────────────

/// What to do with state left behind by an earlier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeDecision {
    /// Keep the state and continue from where it stopped.
    Resume,
    /// Remove the state directory and start over.
    Restart,
    /// Stop without touching anything.
    Abort,
}

impl ResumeDecision {
    /// The three resolutions, in the order they are presented.
    pub const ALL: [ResumeDecision; 3] = [Self::Resume, Self::Restart, Self::Abort];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Restart => "restart",
            Self::Abort => "abort",
        }
    }

    /// Option labels for a choice prompt.
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|d| d.as_str().to_string()).collect()
    }

    /// Map a choice index (as returned by a choice prompt) back to a decision.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ResumeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Guard ─────────────────────────────────────────────────────────────────────

/// Enforces legal stage transitions.
pub struct StageGuard;

impl StageGuard {
    /// Validate a transition and return the new stage.
    ///
    /// Legal: `init -> prd`, `prd -> generating`, `generating -> ready`,
    /// `ready -> generating` (re-generation), and staying put. `init ->
    /// generating` only with `quick`.
    pub fn transition(from: Stage, to: Stage, quick: bool) -> Result<Stage, DomainError> {
        let legal = match (from, to) {
            (a, b) if a == b || a.next() == Some(b) => true,
            (Stage::Ready, Stage::Generating) => true,
            (Stage::Init, Stage::Generating) => quick,
            _ => false,
        };

        if legal {
            Ok(to)
        } else {
            Err(DomainError::StageOrder { from, to })
        }
    }

    /// Whether file generation may start from `stage`.
    pub fn ensure_generation_allowed(stage: Stage, quick: bool) -> Result<(), DomainError> {
        if quick || stage >= Stage::Prd {
            Ok(())
        } else {
            Err(DomainError::GenerationNotAllowed { stage })
        }
    }

    /// Stage after recording requirements: never moves backwards.
    pub fn after_requirements(stage: Stage) -> Stage {
        stage.max(Stage::Prd)
    }
}
