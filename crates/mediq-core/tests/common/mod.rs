#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mediq_core::{
    ErrorInfo, ErrorSource, NotificationSink, Orchestrator, RecordingNotificationSink,
    ResponseOrdering, Transport,
};
use serde_json::{json, Value};
use tokio::sync::oneshot;

type Reply = Result<Value, ErrorInfo>;

enum Scripted {
    Immediate(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// In-memory transport answering calls from a script, in dispatch order
///
/// Gated replies let a test decide when (and in which order) each
/// in-flight request settles.
#[derive(Default)]
pub struct ScriptedTransport {
    calls: Mutex<Vec<(String, Value)>>,
    script: Mutex<VecDeque<Scripted>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, data: Value) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Immediate(Ok(data)));
    }

    pub fn push_err(&self, info: ErrorInfo) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Immediate(Err(info)));
    }

    /// Queue a reply the test releases later through the returned sender
    pub fn push_gated(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn call(&self, operation: &str, payload: Value) -> Result<Value, ErrorInfo> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), payload));
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Immediate(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx.await.unwrap_or_else(|_| {
                Err(ErrorInfo::new(ErrorSource::Network).with_message("gate dropped"))
            }),
            None => Err(ErrorInfo::new(ErrorSource::Network).with_message("no scripted reply")),
        }
    }
}

pub struct Harness {
    pub orchestrator: Orchestrator,
    pub transport: Arc<ScriptedTransport>,
    pub sink: RecordingNotificationSink,
}

pub fn harness() -> Harness {
    harness_with(ResponseOrdering::DiscardStale)
}

pub fn harness_with(ordering: ResponseOrdering) -> Harness {
    let transport = ScriptedTransport::new();
    let sink = RecordingNotificationSink::new();
    let orchestrator = Orchestrator::with_ordering(
        transport.clone(),
        Arc::new(sink.clone()) as Arc<dyn NotificationSink>,
        ordering,
    );
    Harness {
        orchestrator,
        transport,
        sink,
    }
}

/// Yield until the transport has seen `n` calls
pub async fn wait_for_calls(transport: &ScriptedTransport, n: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while transport.call_count() < n {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("transport never reached expected call count");
}

pub fn medicine_data(name: &str) -> Value {
    json!({
        "medicineName": name,
        "information": format!("{} information", name),
        "disclaimer": "Consult a healthcare professional before use."
    })
}

pub fn symptom_data(symptoms: &str, severity: &str) -> Value {
    json!({
        "symptoms": symptoms,
        "severity": severity,
        "suggestion": "Rest, hydrate and monitor your temperature.",
        "requiresDoctor": severity == "serious",
        "canSuggestMedicine": severity != "serious",
        "aiCategory": "general"
    })
}

pub fn remote_500() -> ErrorInfo {
    ErrorInfo::new(ErrorSource::Remote)
        .with_operation("symptom-suggestion")
        .with_status(500)
        .with_message("The AI service could not complete the request (HTTP 500).")
}
