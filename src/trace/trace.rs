use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::report::report_model::ArtifactStatus;

/// Which of the two artifacts an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Binding,
    Logic,
}

/// One line of the generation journal.
#[derive(Debug, Serialize)]
pub struct GenerationEvent {
    pub timestamp_ms: u128,
    pub root: String,
    pub artifact: ArtifactKind,

    pub path: Option<String>,
    pub outcome: String,
    pub detail: Option<String>,

    pub fingerprint: Option<String>,
    pub stubs: usize,
    pub diagnostics: Vec<String>,
}

impl GenerationEvent {
    pub fn now(root: &str, artifact: ArtifactKind) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            root: root.to_string(),
            artifact,
            path: None,
            outcome: ArtifactStatus::NotRequested.label().to_string(),
            detail: None,
            fingerprint: None,
            stubs: 0,
            diagnostics: vec![],
        }
    }

    pub fn with_path(mut self, path: impl ToString) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn with_status(mut self, status: &ArtifactStatus) -> Self {
        self.outcome = status.label().to_string();
        match status {
            ArtifactStatus::Written { fingerprint, .. } => {
                self.fingerprint = Some(fingerprint.clone());
            }
            ArtifactStatus::Skipped { reason } => self.detail = Some(reason.clone()),
            ArtifactStatus::Failed { message } => self.detail = Some(message.clone()),
            ArtifactStatus::NotRequested => {}
        }
        self
    }

    pub fn with_stubs(mut self, stubs: usize) -> Self {
        self.stubs = stubs;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: &[String]) -> Self {
        self.diagnostics = diagnostics.to_vec();
        self
    }
}
