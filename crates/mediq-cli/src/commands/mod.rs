pub mod medicine;
pub mod symptoms;

use std::process::ExitCode;

use mediq_core::{FetchOutcome, Mode, ModeCoordinator};

/// Switch to `mode` and run a fetch against it
pub(crate) async fn run_in_mode(
    coordinator: &mut ModeCoordinator,
    mode: Mode,
    input: &str,
) -> FetchOutcome {
    coordinator.switch_to(mode);
    coordinator.fetch(input).await
}

/// Process exit status for a finished fetch
pub(crate) fn exit_code(outcome: FetchOutcome) -> ExitCode {
    match outcome {
        FetchOutcome::Succeeded => ExitCode::SUCCESS,
        FetchOutcome::Skipped => ExitCode::from(2),
        FetchOutcome::Failed | FetchOutcome::Discarded => ExitCode::FAILURE,
    }
}
