//! Failure notification sinks
//!
//! A side channel for surfacing failures to the presentation layer. The
//! orchestrator calls the sink once per applied failure, after the state
//! update; delivery order relative to state snapshots is not guaranteed.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

/// Receives the user-facing message of each failed fetch
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

impl<F> NotificationSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Emits notifications as `warn` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, message: &str) {
        tracing::warn!(component = module_path!(), op = "notify", notification = message);
    }
}

/// Forwards notifications over an unbounded channel
///
/// A closed receiver is ignored; notifications are fire-and-forget.
#[derive(Debug, Clone)]
pub struct ChannelNotificationSink {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNotificationSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn notify(&self, message: &str) {
        self.tx.send(message.to_string()).ok();
    }
}

/// Keeps every notification in memory, for assertions
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or_default()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .map(|mut m| m.push(message.to_string()))
            .ok();
    }
}
