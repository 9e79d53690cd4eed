//! Request orchestrator
//!
//! Drives every state transition: `fetch` moves a slot to `Pending`, calls
//! the transport, and settles the slot to `Success` or `Failure`; `clear`
//! resets a slot. State lives in a `watch` channel so presentation can read
//! a snapshot or subscribe to changes. The channel's write lock is the only
//! lock, and it is never held across the network `.await`.
//!
//! # Ordering
//!
//! Each `fetch` and `clear` advances a per-kind generation token. Under
//! [`ResponseOrdering::DiscardStale`] a completion whose token is no longer
//! current is dropped: no state change, no notification. Under
//! [`ResponseOrdering::LastSettledWins`] every completion is applied in the
//! order it settles, so an older response can overwrite a newer one.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use mediq_core_types::schema::{EVENT_SKIPPED, EVENT_STALE};
use mediq_core_types::{RequestId, Sensitive};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::errors::{ErrorInfo, MediqError};
use crate::model::{MedicineInfo, Operation, OperationKind, OperationResult, SymptomSuggestion};
use crate::notify::NotificationSink;
use crate::store::OrchestratorState;
use crate::transport::Transport;
use crate::{log_op_end, log_op_error, log_op_start};

const OP_FETCH: &str = "fetch";

/// How completions of superseded requests are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Apply a completion only if no fetch or clear of the same kind
    /// happened after it was dispatched
    #[default]
    DiscardStale,
    /// Apply every completion as it settles
    LastSettledWins,
}

/// What a call to `fetch` ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Blank input; state untouched, transport not called
    Skipped,
    /// Slot set to `Success`
    Succeeded,
    /// Slot set to `Failure` and one notification emitted
    Failed,
    /// Completion arrived for a superseded generation and was dropped
    Discarded,
}

struct Inner {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn NotificationSink>,
    ordering: ResponseOrdering,
    state: watch::Sender<OrchestratorState>,
    generations: [AtomicU64; 2],
}

/// Cloneable handle over one independent orchestration state
#[derive(Clone)]
pub struct Orchestrator {
    inner: Arc<Inner>,
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("ordering", &self.inner.ordering)
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Create an orchestrator that discards stale completions
    pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_ordering(transport, sink, ResponseOrdering::default())
    }

    /// Create an orchestrator with an explicit ordering policy
    pub fn with_ordering(
        transport: Arc<dyn Transport>,
        sink: Arc<dyn NotificationSink>,
        ordering: ResponseOrdering,
    ) -> Self {
        let (state, _) = watch::channel(OrchestratorState::new());
        Self {
            inner: Arc::new(Inner {
                transport,
                sink,
                ordering,
                state,
                generations: [AtomicU64::new(0), AtomicU64::new(0)],
            }),
        }
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.inner.ordering
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> OrchestratorState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every committed transition
    pub fn subscribe(&self) -> watch::Receiver<OrchestratorState> {
        self.inner.state.subscribe()
    }

    /// Current generation token for `kind`
    pub fn generation(&self, kind: OperationKind) -> u64 {
        self.inner.generations[kind.index()].load(Ordering::SeqCst)
    }

    /// Fetch for a kind chosen at runtime
    pub async fn fetch(&self, kind: OperationKind, input: &str) -> FetchOutcome {
        match kind {
            OperationKind::MedicineInfo => self.fetch_op::<MedicineInfo>(input).await,
            OperationKind::SymptomSuggestion => self.fetch_op::<SymptomSuggestion>(input).await,
        }
    }

    pub async fn fetch_medicine_info(&self, medicine_name: &str) -> FetchOutcome {
        self.fetch_op::<MedicineInfo>(medicine_name).await
    }

    pub async fn fetch_symptom_suggestion(&self, symptoms: &str) -> FetchOutcome {
        self.fetch_op::<SymptomSuggestion>(symptoms).await
    }

    /// Dispatch one request for operation `O`
    ///
    /// Blank input is a no-op. Otherwise the slot goes `Pending`, the
    /// transport is called once with the trimmed input, and the slot settles
    /// according to the ordering policy. Failures never propagate; they are
    /// stored and reported through the notification sink.
    pub async fn fetch_op<O: Operation>(&self, input: &str) -> FetchOutcome {
        let kind = O::KIND;
        let input = match crate::validation::normalize_input(kind, input) {
            Ok(trimmed) => Sensitive::new(trimmed),
            Err(_) => {
                tracing::debug!(
                    component = module_path!(),
                    op = OP_FETCH,
                    event = EVENT_SKIPPED,
                    kind = kind.operation_name(),
                );
                return FetchOutcome::Skipped;
            }
        };

        let request_id = RequestId::new();
        let generation = self.begin::<O>();
        log_op_start!(
            OP_FETCH,
            kind = kind.operation_name(),
            generation = generation,
            request_id = %request_id,
            input = ?input,
        );
        let started = Instant::now();

        let result = self
            .inner
            .transport
            .call(kind.operation_name(), kind.payload(input.expose()))
            .await
            .and_then(|data| decode::<O>(data, &request_id));
        let duration_ms = started.elapsed().as_millis() as u64;

        let failure = result.as_ref().err().cloned();
        if !self.settle::<O>(generation, result.into()) {
            tracing::info!(
                component = module_path!(),
                op = OP_FETCH,
                event = EVENT_STALE,
                kind = kind.operation_name(),
                generation = generation,
                current_generation = self.generation(kind),
                request_id = %request_id,
                duration_ms = duration_ms,
            );
            return FetchOutcome::Discarded;
        }

        match failure {
            None => {
                log_op_end!(
                    OP_FETCH,
                    duration_ms = duration_ms,
                    kind = kind.operation_name(),
                    generation = generation,
                    request_id = %request_id,
                );
                FetchOutcome::Succeeded
            }
            Some(info) => {
                log_op_error!(
                    OP_FETCH,
                    info.clone(),
                    duration_ms = duration_ms,
                    kind = kind.operation_name(),
                    generation = generation,
                    request_id = %request_id,
                );
                self.inner.sink.notify(info.message());
                FetchOutcome::Failed
            }
        }
    }

    /// Reset one slot to `Idle`
    ///
    /// Does not cancel an in-flight request. Whether its completion can
    /// still land depends on the ordering policy.
    pub fn clear(&self, kind: OperationKind) {
        self.inner.state.send_modify(|state| {
            self.inner.generations[kind.index()].fetch_add(1, Ordering::SeqCst);
            state.clear(kind);
            state.sync_loading();
        });
        tracing::debug!(
            component = module_path!(),
            op = "clear",
            kind = kind.operation_name(),
            generation = self.generation(kind),
        );
    }

    pub fn clear_medicine_info(&self) {
        self.clear(OperationKind::MedicineInfo);
    }

    pub fn clear_symptom_suggestion(&self) {
        self.clear(OperationKind::SymptomSuggestion);
    }

    /// Return to the initial state: both slots `Idle`, no last error
    pub fn reset(&self) {
        self.inner.state.send_modify(|state| {
            for generation in &self.inner.generations {
                generation.fetch_add(1, Ordering::SeqCst);
            }
            *state = OrchestratorState::new();
        });
    }

    fn begin<O: Operation>(&self) -> u64 {
        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            generation = self.inner.generations[O::KIND.index()].fetch_add(1, Ordering::SeqCst) + 1;
            state.set::<O>(OperationResult::Pending);
            state.set_last_error(None);
            state.sync_loading();
        });
        generation
    }

    /// Apply a completion; `false` when it was discarded as stale
    fn settle<O: Operation>(&self, generation: u64, result: OperationResult<O::Output>) -> bool {
        let inner = &self.inner;
        inner.state.send_if_modified(|state| {
            let current = inner.generations[O::KIND.index()].load(Ordering::SeqCst);
            if inner.ordering == ResponseOrdering::DiscardStale && current != generation {
                return false;
            }
            if let Some(info) = result.failure() {
                state.set_last_error(Some(info.clone()));
            }
            state.set::<O>(result);
            state.sync_loading();
            true
        })
    }
}

fn decode<O: Operation>(data: serde_json::Value, request_id: &RequestId) -> Result<O::Output, ErrorInfo> {
    serde_json::from_value(data).map_err(|err| {
        tracing::warn!(
            component = module_path!(),
            kind = O::KIND.operation_name(),
            request_id = %request_id,
            reason = %err,
            "result did not match expected shape"
        );
        ErrorInfo::from(MediqError::Decode {
            operation: O::KIND.operation_name().to_string(),
            reason: err.to_string(),
        })
    })
}
