//! Input validation helpers
//!
//! Pure functions the presentation layer runs before dispatching a fetch.
//! The orchestrator re-checks with the same function as a guard.

use crate::errors::MediqError;
use crate::model::OperationKind;

/// True when `value` has at least one non-whitespace character
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Trim `input` for dispatch as `kind`
///
/// # Errors
///
/// Returns `EmptyInput` when nothing is left after trimming.
pub fn normalize_input(kind: OperationKind, input: &str) -> Result<String, MediqError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MediqError::EmptyInput {
            operation: kind.operation_name().to_string(),
        });
    }
    Ok(trimmed.to_string())
}
