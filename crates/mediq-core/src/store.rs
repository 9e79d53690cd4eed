use serde::Serialize;

use crate::errors::ErrorInfo;
use crate::model::{
    MedicineInfo, MedicineInfoResult, Operation, OperationKind, OperationResult, SlotStatus,
    SymptomSuggestion, SymptomSuggestionResult,
};

/// Operation state store
///
/// Holds one slot per operation kind, the shared `loading` flag and the
/// last failure. This is a dumb container: `set` overwrites, `clear` resets
/// one slot, nothing is validated. Keeping `loading` in step with the slots
/// is the orchestrator's job (see [`OrchestratorState::sync_loading`]).
///
/// Presentation code only ever sees clones of this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorState {
    pub(crate) medicine_info: OperationResult<MedicineInfoResult>,
    pub(crate) symptom_suggestion: OperationResult<SymptomSuggestionResult>,
    loading: bool,
    last_error: Option<ErrorInfo>,
}

impl OrchestratorState {
    /// Fresh state: both slots `Idle`, not loading
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for operation `O`
    pub fn get<O: Operation>(&self) -> &OperationResult<O::Output> {
        O::slot(self)
    }

    /// Overwrite the slot for operation `O`
    pub fn set<O: Operation>(&mut self, result: OperationResult<O::Output>) {
        *O::slot_mut(self) = result;
    }

    /// Reset one slot to `Idle`
    ///
    /// Leaves the other slot and the `loading` flag untouched.
    pub fn clear(&mut self, kind: OperationKind) {
        match kind {
            OperationKind::MedicineInfo => self.set::<MedicineInfo>(OperationResult::Idle),
            OperationKind::SymptomSuggestion => {
                self.set::<SymptomSuggestion>(OperationResult::Idle)
            }
        }
    }

    pub fn medicine_info(&self) -> &OperationResult<MedicineInfoResult> {
        &self.medicine_info
    }

    pub fn symptom_suggestion(&self) -> &OperationResult<SymptomSuggestionResult> {
        &self.symptom_suggestion
    }

    /// Kind-erased status of one slot
    pub fn status(&self, kind: OperationKind) -> SlotStatus {
        match kind {
            OperationKind::MedicineInfo => self.medicine_info.status(),
            OperationKind::SymptomSuggestion => self.symptom_suggestion.status(),
        }
    }

    /// Failure held by one slot, if any
    pub fn failure(&self, kind: OperationKind) -> Option<&ErrorInfo> {
        match kind {
            OperationKind::MedicineInfo => self.medicine_info.failure(),
            OperationKind::SymptomSuggestion => self.symptom_suggestion.failure(),
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn last_error(&self) -> Option<&ErrorInfo> {
        self.last_error.as_ref()
    }

    pub fn set_last_error(&mut self, error: Option<ErrorInfo>) {
        self.last_error = error;
    }

    /// Number of slots currently `Pending`
    pub fn pending_count(&self) -> usize {
        OperationKind::ALL
            .iter()
            .filter(|kind| self.status(**kind) == SlotStatus::Pending)
            .count()
    }

    /// Re-derive `loading` from the slots
    pub fn sync_loading(&mut self) {
        self.loading = self.pending_count() > 0;
    }
}
