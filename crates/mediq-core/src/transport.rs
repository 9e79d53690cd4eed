//! Transport seam
//!
//! The orchestrator talks to the AI service only through this trait. The
//! HTTP implementation lives in `mediq-transport`; tests substitute a
//! scripted in-memory transport.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ErrorInfo;

/// Single-attempt call to a named remote operation
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `payload` to `operation` and return the unwrapped `data` field
    ///
    /// No retries and no caching. Implementations classify every failure as
    /// `ErrorSource::Network` or `ErrorSource::Remote`.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorInfo` for transport failures, non-2xx statuses and
    /// malformed bodies.
    async fn call(&self, operation: &str, payload: Value) -> Result<Value, ErrorInfo>;
}
