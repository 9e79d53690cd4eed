use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use mediq_core::{FetchOutcome, Mode, ModeCoordinator};

use crate::output;

#[derive(Debug, Args)]
pub struct SymptomsArgs {
    /// Free-text symptom description, e.g. "fever and sore throat"
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

pub async fn execute(
    args: &SymptomsArgs,
    coordinator: &mut ModeCoordinator,
    json: bool,
) -> Result<ExitCode> {
    let text = args.text.join(" ");
    let outcome = super::run_in_mode(coordinator, Mode::Symptom, &text).await;

    if outcome == FetchOutcome::Skipped {
        eprintln!("Error: symptom description must not be empty");
        return Ok(super::exit_code(outcome));
    }

    let state = coordinator.orchestrator().snapshot();
    if json {
        output::print_json(state.symptom_suggestion())?;
    } else if let Some(triage) = state.symptom_suggestion().success() {
        output::print_triage(triage);
    }
    Ok(super::exit_code(outcome))
}
