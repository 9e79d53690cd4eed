//! Mode coordinator
//!
//! Presentation shows one result set at a time. Switching mode clears the
//! slot belonging to the mode being left, so no stale result from the
//! previous mode is ever visible. An in-flight fetch for the hidden kind
//! is not cancelled.

use serde::{Deserialize, Serialize};

use crate::model::OperationKind;
use crate::orchestrator::{FetchOutcome, Orchestrator};

/// Presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Medicine,
    Symptom,
}

impl Mode {
    /// Operation kind whose result this mode displays
    pub fn operation_kind(&self) -> OperationKind {
        match self {
            Mode::Medicine => OperationKind::MedicineInfo,
            Mode::Symptom => OperationKind::SymptomSuggestion,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Medicine => "medicine",
            Mode::Symptom => "symptom",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-state machine over [`Mode`], driving clears on the orchestrator
#[derive(Clone)]
pub struct ModeCoordinator {
    orchestrator: Orchestrator,
    current: Mode,
}

impl ModeCoordinator {
    /// Start in `Mode::Medicine`
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self::with_mode(orchestrator, Mode::default())
    }

    /// Start in a caller-supplied mode
    pub fn with_mode(orchestrator: Orchestrator, initial: Mode) -> Self {
        Self {
            orchestrator,
            current: initial,
        }
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Switch to `mode`
    ///
    /// Returns `false` and does nothing when already in `mode`. Otherwise
    /// clears the kind not bound to `mode` before switching.
    pub fn switch_to(&mut self, mode: Mode) -> bool {
        if mode == self.current {
            return false;
        }

        let hidden = mode.operation_kind().other();
        self.orchestrator.clear(hidden);
        tracing::debug!(
            component = module_path!(),
            from = self.current.as_str(),
            to = mode.as_str(),
            cleared = hidden.operation_name(),
            "mode switched"
        );
        self.current = mode;
        true
    }

    /// Fetch for the kind bound to the current mode
    pub async fn fetch(&self, input: &str) -> FetchOutcome {
        self.orchestrator
            .fetch(self.current.operation_kind(), input)
            .await
    }

    /// Clear the kind bound to the current mode
    pub fn clear(&self) {
        self.orchestrator.clear(self.current.operation_kind());
    }
}
