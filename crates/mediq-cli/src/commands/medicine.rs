use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use mediq_core::{FetchOutcome, Mode, ModeCoordinator};

use crate::output;

#[derive(Debug, Args)]
pub struct MedicineArgs {
    /// Medicine name, e.g. "paracetamol"
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

pub async fn execute(
    args: &MedicineArgs,
    coordinator: &mut ModeCoordinator,
    json: bool,
) -> Result<ExitCode> {
    let name = args.name.join(" ");
    let outcome = super::run_in_mode(coordinator, Mode::Medicine, &name).await;

    if outcome == FetchOutcome::Skipped {
        eprintln!("Error: medicine name must not be empty");
        return Ok(super::exit_code(outcome));
    }

    let state = coordinator.orchestrator().snapshot();
    if json {
        output::print_json(state.medicine_info())?;
    } else if let Some(info) = state.medicine_info().success() {
        output::print_medicine(info);
    }
    Ok(super::exit_code(outcome))
}
