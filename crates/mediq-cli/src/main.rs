//! MedIQ CLI
//!
//! Command-line front end for the medicine-information and symptom-triage
//! operations.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use mediq_core::logging_facility::{init, Profile};
use mediq_core::{ClientConfig, ModeCoordinator, NotificationSink, Orchestrator};
use mediq_transport::HttpTransport;

mod commands;
mod output;

#[derive(Debug, Parser)]
#[command(name = "mediq")]
#[command(about = "MedIQ - AI medicine information and symptom triage", long_about = None)]
struct Cli {
    /// Base endpoint of the AI service (overrides config and MEDIQ_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the resulting state as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Dev)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Dev,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up information about a medicine
    Medicine(commands::medicine::MedicineArgs),
    /// Get a triage suggestion for a set of symptoms
    Symptoms(commands::symptoms::SymptomsArgs),
}

/// Writes failure notifications to stderr
struct StderrSink;

impl NotificationSink for StderrSink {
    fn notify(&self, message: &str) {
        eprintln!("! {}", message);
    }
}

fn build_coordinator(cli: &Cli) -> anyhow::Result<ModeCoordinator> {
    let config = ClientConfig::load_with_base_url(cli.config.as_deref(), cli.base_url.as_deref())?;
    tracing::debug!(
        base_url = %config.base_url,
        ordering = ?config.response_ordering,
        "configuration loaded"
    );

    let transport = HttpTransport::new(&config)?;
    let orchestrator = Orchestrator::with_ordering(
        Arc::new(transport),
        Arc::new(StderrSink),
        config.response_ordering,
    );
    Ok(ModeCoordinator::with_mode(orchestrator, config.default_mode))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Dev => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let mut coordinator = match build_coordinator(&cli) {
        Ok(coordinator) => coordinator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let result = match &cli.command {
        Commands::Medicine(args) => {
            commands::medicine::execute(args, &mut coordinator, cli.json).await
        }
        Commands::Symptoms(args) => {
            commands::symptoms::execute(args, &mut coordinator, cli.json).await
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
