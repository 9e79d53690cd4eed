//! Operation kinds and their static contract
//!
//! `OperationKind` is the kind-erased tag used for clears, logs and wire
//! names. The `Operation` trait binds each kind to its result type and its
//! slot in `OrchestratorState`, so typed fetches cannot write the wrong slot.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::MediqError;
use crate::model::outcome::OperationResult;
use crate::model::results::{MedicineInfoResult, SymptomSuggestionResult};
use crate::store::OrchestratorState;

/// One of the two supported AI queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationKind {
    MedicineInfo,
    SymptomSuggestion,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::MedicineInfo, OperationKind::SymptomSuggestion];

    /// Remote operation name, appended to the base endpoint
    pub fn operation_name(&self) -> &'static str {
        match self {
            OperationKind::MedicineInfo => "medicine-info",
            OperationKind::SymptomSuggestion => "symptom-suggestion",
        }
    }

    /// The single required request field
    pub fn payload_field(&self) -> &'static str {
        match self {
            OperationKind::MedicineInfo => "medicineName",
            OperationKind::SymptomSuggestion => "symptoms",
        }
    }

    /// Request body for `input`
    pub fn payload(&self, input: &str) -> Value {
        let mut body = serde_json::Map::new();
        body.insert(self.payload_field().to_string(), json!(input));
        Value::Object(body)
    }

    pub fn other(&self) -> OperationKind {
        match self {
            OperationKind::MedicineInfo => OperationKind::SymptomSuggestion,
            OperationKind::SymptomSuggestion => OperationKind::MedicineInfo,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            OperationKind::MedicineInfo => 0,
            OperationKind::SymptomSuggestion => 1,
        }
    }

    /// Resolve a remote operation name
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` for anything but the two known names.
    pub fn from_operation_name(name: &str) -> Result<Self, MediqError> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.operation_name() == name)
            .ok_or_else(|| MediqError::UnknownOperation {
                operation: name.to_string(),
            })
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation_name())
    }
}

impl FromStr for OperationKind {
    type Err = MediqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::from_operation_name(s)
    }
}

/// Static binding of an operation kind to its result type and state slot
pub trait Operation: Send + Sync + 'static {
    type Output: DeserializeOwned + Serialize + Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    const KIND: OperationKind;

    fn slot(state: &OrchestratorState) -> &OperationResult<Self::Output>;

    fn slot_mut(state: &mut OrchestratorState) -> &mut OperationResult<Self::Output>;
}

/// Medicine-information lookup
#[derive(Debug, Clone, Copy)]
pub struct MedicineInfo;

impl Operation for MedicineInfo {
    type Output = MedicineInfoResult;

    const KIND: OperationKind = OperationKind::MedicineInfo;

    fn slot(state: &OrchestratorState) -> &OperationResult<Self::Output> {
        &state.medicine_info
    }

    fn slot_mut(state: &mut OrchestratorState) -> &mut OperationResult<Self::Output> {
        &mut state.medicine_info
    }
}

/// Symptom-based triage
#[derive(Debug, Clone, Copy)]
pub struct SymptomSuggestion;

impl Operation for SymptomSuggestion {
    type Output = SymptomSuggestionResult;

    const KIND: OperationKind = OperationKind::SymptomSuggestion;

    fn slot(state: &OrchestratorState) -> &OperationResult<Self::Output> {
        &state.symptom_suggestion
    }

    fn slot_mut(state: &mut OrchestratorState) -> &mut OperationResult<Self::Output> {
        &mut state.symptom_suggestion
    }
}
