use serde::Serialize;

use crate::errors::ErrorInfo;

/// State of one operation slot
///
/// Exactly one variant holds at any time. `Failure` is always
/// distinguishable from both `Idle` and `Success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum OperationResult<T> {
    Idle,
    Pending,
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Default for OperationResult<T> {
    fn default() -> Self {
        OperationResult::Idle
    }
}

impl<T> OperationResult<T> {
    pub fn status(&self) -> SlotStatus {
        match self {
            OperationResult::Idle => SlotStatus::Idle,
            OperationResult::Pending => SlotStatus::Pending,
            OperationResult::Success(_) => SlotStatus::Success,
            OperationResult::Failure(_) => SlotStatus::Failure,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, OperationResult::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OperationResult::Pending)
    }

    /// The produced value, if the slot holds a success
    pub fn success(&self) -> Option<&T> {
        match self {
            OperationResult::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if the slot holds one
    pub fn failure(&self) -> Option<&ErrorInfo> {
        match self {
            OperationResult::Failure(info) => Some(info),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ErrorInfo>> for OperationResult<T> {
    fn from(result: Result<T, ErrorInfo>) -> Self {
        match result {
            Ok(value) => OperationResult::Success(value),
            Err(info) => OperationResult::Failure(info),
        }
    }
}

/// Payload-free view of a slot, for logging and kind-erased queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Idle,
    Pending,
    Success,
    Failure,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Idle => "idle",
            SlotStatus::Pending => "pending",
            SlotStatus::Success => "success",
            SlotStatus::Failure => "failure",
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
