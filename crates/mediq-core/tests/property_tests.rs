// Model-based property tests: random sequential action streams against a
// trivial reference model of slot statuses.

mod common;

use std::collections::HashMap;

use common::{harness, medicine_data, remote_500, symptom_data};
use mediq_core::{FetchOutcome, Mode, ModeCoordinator, OperationKind, SlotStatus};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    FetchOk(OperationKind),
    FetchErr(OperationKind),
    Clear(OperationKind),
    Switch(Mode),
}

fn kind_strategy() -> impl Strategy<Value = OperationKind> {
    prop_oneof![
        Just(OperationKind::MedicineInfo),
        Just(OperationKind::SymptomSuggestion)
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        kind_strategy().prop_map(Action::FetchOk),
        kind_strategy().prop_map(Action::FetchErr),
        kind_strategy().prop_map(Action::Clear),
        prop_oneof![Just(Mode::Medicine), Just(Mode::Symptom)].prop_map(Action::Switch),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn blank_input_never_dispatches(blank in "[ \t\r\n]{0,12}") {
        let rt = runtime();
        let h = harness();

        let outcome = rt.block_on(h.orchestrator.fetch_symptom_suggestion(&blank));

        prop_assert_eq!(outcome, FetchOutcome::Skipped);
        prop_assert_eq!(h.transport.call_count(), 0);
        prop_assert!(h.orchestrator.snapshot().symptom_suggestion().is_idle());
    }

    #[test]
    fn repeated_clear_is_idempotent(times in 1usize..8) {
        let h = harness();
        for _ in 0..times {
            h.orchestrator.clear_medicine_info();
        }
        let state = h.orchestrator.snapshot();
        prop_assert!(state.medicine_info().is_idle());
        prop_assert!(!state.loading());
    }

    #[test]
    fn sequential_actions_match_model(actions in prop::collection::vec(action_strategy(), 0..24)) {
        let rt = runtime();
        let h = harness();
        let mut coordinator = ModeCoordinator::new(h.orchestrator.clone());
        let mut model: HashMap<OperationKind, SlotStatus> = OperationKind::ALL
            .into_iter()
            .map(|k| (k, SlotStatus::Idle))
            .collect();
        let mut expected_notifications = 0;

        for action in actions {
            match action {
                Action::FetchOk(kind) => {
                    h.transport.push_ok(match kind {
                        OperationKind::MedicineInfo => medicine_data("insulin"),
                        OperationKind::SymptomSuggestion => symptom_data("fever", "mild"),
                    });
                    rt.block_on(h.orchestrator.fetch(kind, "query"));
                    model.insert(kind, SlotStatus::Success);
                }
                Action::FetchErr(kind) => {
                    h.transport.push_err(remote_500());
                    rt.block_on(h.orchestrator.fetch(kind, "query"));
                    model.insert(kind, SlotStatus::Failure);
                    expected_notifications += 1;
                }
                Action::Clear(kind) => {
                    h.orchestrator.clear(kind);
                    model.insert(kind, SlotStatus::Idle);
                }
                Action::Switch(mode) => {
                    if coordinator.switch_to(mode) {
                        model.insert(mode.operation_kind().other(), SlotStatus::Idle);
                    }
                }
            }

            let state = h.orchestrator.snapshot();
            prop_assert_eq!(state.pending_count(), 0);
            prop_assert_eq!(state.loading(), state.pending_count() > 0);
            for kind in OperationKind::ALL {
                prop_assert_eq!(state.status(kind), model[&kind]);
            }
        }

        prop_assert_eq!(h.sink.count(), expected_notifications);
    }
}
