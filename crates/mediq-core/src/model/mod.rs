//! Domain model: operation kinds, their results, and slot outcomes

pub mod operation;
pub mod outcome;
pub mod results;

pub use operation::{MedicineInfo, Operation, OperationKind, SymptomSuggestion};
pub use outcome::{OperationResult, SlotStatus};
pub use results::{MedicineInfoResult, Severity, SymptomSuggestionResult};
