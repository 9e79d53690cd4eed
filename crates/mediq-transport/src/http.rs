use std::time::{Duration, Instant};

use async_trait::async_trait;
use mediq_core::errors::{ErrorInfo, MediqError, Result};
use mediq_core::{log_op_end, log_op_error, log_op_start, ClientConfig, OperationKind, Transport};
use serde_json::Value;

const OP_CALL: &str = "transport_call";

/// HTTP transport for the AI service
///
/// Single attempt per call. No timeout is set unless the configuration
/// asks for one.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport from validated configuration
    ///
    /// # Errors
    ///
    /// Returns `MediqError::Config` if the configuration is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| MediqError::Config {
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}", self.base_url, operation)
    }

    async fn send(&self, operation: &str, payload: Value) -> Result<(u16, Value)> {
        OperationKind::from_operation_name(operation)?;

        let response = self
            .client
            .post(self.url(operation))
            .json(&payload)
            .send()
            .await
            .map_err(|e| MediqError::Http {
                operation: operation.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| MediqError::Http {
            operation: operation.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(MediqError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
                upstream: upstream_message(&body),
            });
        }

        let data = unwrap_data(&body).map_err(|reason| MediqError::MalformedResponse {
            operation: operation.to_string(),
            reason,
        })?;
        Ok((status.as_u16(), data))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, operation: &str, payload: Value) -> std::result::Result<Value, ErrorInfo> {
        log_op_start!(OP_CALL, operation = operation);
        let started = Instant::now();

        let result = self.send(operation, payload).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok((status, data)) => {
                log_op_end!(
                    OP_CALL,
                    duration_ms = duration_ms,
                    operation = operation,
                    http_status = status,
                );
                Ok(data)
            }
            Err(err) => {
                // Detail such as the connect error stays here; the
                // ErrorInfo only carries the user-facing message.
                tracing::warn!(component = module_path!(), operation = operation, detail = %err);
                let info = ErrorInfo::from(err);
                log_op_error!(
                    OP_CALL,
                    info.clone(),
                    duration_ms = duration_ms,
                    operation = operation,
                );
                Err(info)
            }
        }
    }
}

/// Pull `data` out of a 2xx JSON envelope
fn unwrap_data(body: &[u8]) -> std::result::Result<Value, String> {
    let envelope: Value =
        serde_json::from_slice(body).map_err(|e| format!("body is not JSON: {}", e))?;
    match envelope {
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Null) | None => Err("response has no `data` field".to_string()),
            Some(data) => Ok(data),
        },
        _ => Err("response body is not a JSON object".to_string()),
    }
}

/// Message carried by an error body, if any
///
/// Accepts `{ "message": ".." }`, `{ "error": ".." }` and
/// `{ "error": { "message": ".." } }`.
fn upstream_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })?;
    let trimmed = message.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
