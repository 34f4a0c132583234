use serde::{Deserialize, Serialize};

// ============================================================================
// Generation report: aggregates per-root outcomes
// ============================================================================

/// What happened to one artifact during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactStatus {
    /// The operation did not touch this artifact.
    NotRequested,

    /// Written to disk. `changed` is false when the previous content had the
    /// same fingerprint.
    Written { fingerprint: String, changed: bool },

    /// Deliberately left alone (e.g. an existing logic artifact).
    Skipped { reason: String },

    /// Persisting failed; the message is also logged.
    Failed { message: String },
}

impl ArtifactStatus {
    pub fn skipped(reason: impl Into<String>) -> Self {
        ArtifactStatus::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        ArtifactStatus::Failed {
            message: message.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ArtifactStatus::Failed { .. })
    }

    pub fn is_written(&self) -> bool {
        matches!(self, ArtifactStatus::Written { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactStatus::NotRequested => "not_requested",
            ArtifactStatus::Written { .. } => "written",
            ArtifactStatus::Skipped { .. } => "skipped",
            ArtifactStatus::Failed { .. } => "failed",
        }
    }
}

/// Outcome of generating one UI root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootReport {
    pub root: String,

    /// Destination folder, as displayed
    pub folder: String,

    /// Number of controls that made it into the descriptor set
    pub descriptors: usize,

    /// Number of interactive controls (one handler each)
    pub handlers: usize,

    /// Handlers that got a placeholder body in the binding artifact
    pub stubs_injected: Vec<String>,

    /// Recoverable problems found while collecting controls
    pub diagnostics: Vec<String>,

    pub binding: ArtifactStatus,
    pub logic: ArtifactStatus,
}

impl RootReport {
    pub fn has_failures(&self) -> bool {
        self.binding.is_failed() || self.logic.is_failed()
    }
}

/// Aggregated report for a batch of roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub roots: Vec<RootReport>,
}

impl BatchReport {
    pub fn from_roots(roots: Vec<RootReport>) -> Self {
        Self { roots }
    }

    pub fn failed_roots(&self) -> usize {
        self.roots.iter().filter(|r| r.has_failures()).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_roots() == 0
    }

    pub fn diagnostic_count(&self) -> usize {
        self.roots.iter().map(|r| r.diagnostics.len()).sum()
    }
}
