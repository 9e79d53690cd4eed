use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using MediqError
pub type Result<T> = std::result::Result<T, MediqError>;

// ========== Error Facility ==========

/// Where a failure originated
///
/// This is the classification presentation layers see on a `Failure` slot.
/// Each source maps to a stable error code for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSource {
    /// Transport-level failure: connection refused, DNS, timeout
    Network,
    /// Input rejected before dispatch
    Validation,
    /// The AI service answered, but not with a usable `2xx` body
    Remote,
}

impl ErrorSource {
    /// Get the stable error code for this source
    pub fn code(&self) -> &'static str {
        match self {
            ErrorSource::Network => "ERR_NETWORK",
            ErrorSource::Validation => "ERR_VALIDATION",
            ErrorSource::Remote => "ERR_REMOTE",
        }
    }

    /// Wire name, as used in serialized state
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSource::Network => "network",
            ErrorSource::Validation => "validation",
            ErrorSource::Remote => "remote",
        }
    }
}

impl std::fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure stored in a `Failure` slot
///
/// Carries the user-facing message plus classification fields. Built with
/// the `with_*` methods:
///
/// ```
/// use mediq_core::errors::{ErrorInfo, ErrorSource};
///
/// let info = ErrorInfo::new(ErrorSource::Remote)
///     .with_operation("symptom-suggestion")
///     .with_status(500)
///     .with_message("model overloaded");
/// assert_eq!(info.code(), "ERR_REMOTE");
/// assert_eq!(info.message(), "model overloaded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    message: String,
    source: ErrorSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl ErrorInfo {
    /// Create a new error with the specified source and an empty message
    pub fn new(source: ErrorSource) -> Self {
        Self {
            message: String::new(),
            source,
            operation: None,
            status: None,
        }
    }

    /// Add the user-facing message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the remote operation name
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Add the HTTP status returned by the service
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error source
    pub fn source(&self) -> ErrorSource {
        self.source
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.source.code()
    }

    /// Get the user-facing message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation context, if any
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Get the HTTP status, if the service answered
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.operation {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(status) = self.status {
            write!(f, " (status: {})", status)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorInfo {}

// ========== End Error Facility ==========

/// Generic message for requests that never reached the service
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the AI service. Please try again.";

/// Generic message for a 2xx answer that could not be used
pub const MALFORMED_RESPONSE_MESSAGE: &str = "The AI service returned an unexpected response.";

/// Error taxonomy for MedIQ operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediqError {
    /// Input was empty or whitespace-only
    #[error("Input for {operation} must not be empty")]
    EmptyInput { operation: String },

    /// Operation name is not one of the known remote operations
    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    /// The request never produced a response
    #[error("Network error calling {operation}: {message}")]
    Http { operation: String, message: String },

    /// The service answered with a non-2xx status
    #[error("{operation} returned HTTP {status}")]
    Status {
        operation: String,
        status: u16,
        /// Message taken from the response body, if any
        upstream: Option<String>,
    },

    /// 2xx body was not JSON or had no `data` field
    #[error("Malformed response from {operation}: {reason}")]
    MalformedResponse { operation: String, reason: String },

    /// `data` did not match the expected result shape
    #[error("Failed to decode {operation} result: {reason}")]
    Decode { operation: String, reason: String },

    /// Configuration could not be loaded or failed validation
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl From<config::ConfigError> for MediqError {
    fn from(err: config::ConfigError) -> Self {
        MediqError::Config {
            message: err.to_string(),
        }
    }
}

/// Conversion from MediqError to the ErrorInfo stored in state
///
/// The message is what a user sees: upstream text when the service sent
/// one, a generic sentence otherwise. Internal details stay in the logs.
impl From<MediqError> for ErrorInfo {
    fn from(err: MediqError) -> Self {
        match err {
            MediqError::EmptyInput { operation } => ErrorInfo::new(ErrorSource::Validation)
                .with_operation(operation)
                .with_message("Please enter a value before searching."),

            MediqError::UnknownOperation { operation } => ErrorInfo::new(ErrorSource::Validation)
                .with_message(format!("Unknown operation '{}'", operation))
                .with_operation(operation),

            MediqError::Http { operation, .. } => ErrorInfo::new(ErrorSource::Network)
                .with_operation(operation)
                .with_message(NETWORK_FAILURE_MESSAGE),

            MediqError::Status {
                operation,
                status,
                upstream,
            } => {
                let message = upstream
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| {
                        format!(
                            "The AI service could not complete the request (HTTP {}).",
                            status
                        )
                    });
                ErrorInfo::new(ErrorSource::Remote)
                    .with_operation(operation)
                    .with_status(status)
                    .with_message(message)
            }

            MediqError::MalformedResponse { operation, .. }
            | MediqError::Decode { operation, .. } => ErrorInfo::new(ErrorSource::Remote)
                .with_operation(operation)
                .with_message(MALFORMED_RESPONSE_MESSAGE),

            MediqError::Config { message } => {
                ErrorInfo::new(ErrorSource::Validation).with_message(message)
            }
        }
    }
}
