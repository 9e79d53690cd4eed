//! MedIQ Core - client-side request orchestration
//!
//! This crate mediates between a user interface and the two AI-backed
//! diagnostic operations (medicine information, symptom triage):
//! - Operation state store with one slot per operation kind
//! - Orchestrator driving fetch/clear transitions with generation tokens
//! - Mode coordinator keeping a single result set live
//! - Transport and notification seams for injection
//! - Error and logging facilities, layered configuration

pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod mode;
pub mod model;
pub mod notify;
pub mod orchestrator;
pub mod store;
pub mod transport;
pub mod validation;

// Used by the logging macros through `$crate`
pub use mediq_core_types;
pub use tracing;

// Re-export commonly used types
pub use config::ClientConfig;
pub use errors::{ErrorInfo, ErrorSource, MediqError, Result};
pub use mode::{Mode, ModeCoordinator};
pub use model::{
    MedicineInfo, MedicineInfoResult, Operation, OperationKind, OperationResult, Severity,
    SlotStatus, SymptomSuggestion, SymptomSuggestionResult,
};
pub use notify::{
    ChannelNotificationSink, NotificationSink, RecordingNotificationSink, TracingNotificationSink,
};
pub use orchestrator::{FetchOutcome, Orchestrator, ResponseOrdering};
pub use store::OrchestratorState;
pub use transport::Transport;
