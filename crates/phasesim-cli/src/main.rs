use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use phasesim_cli::cli::{Cli, Commands};
use phasesim_cli::config::load_config;
use phasesim_core::SimError;

mod commands;

use crate::commands::{completions, simulate};

/// Rejected input gets a one-line message; anything else keeps the full chain.
fn log_failure(command: &str, e: &anyhow::Error) {
    match e.downcast_ref::<SimError>() {
        Some(err) if err.is_input_error() => error!("{command} command rejected input: {e:#}"),
        _ => error!("{command} command failed: {:?}", e),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let config_level = config
        .as_ref()
        .ok()
        .and_then(|config| config.logging.level().ok().flatten());
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level.or(config_level).unwrap_or(Level::INFO))
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Loading config failed: {:?}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.logging.level() {
        error!("Ignoring logging config: {e}");
    }

    let result = match &cli.command {
        Commands::Balanced { fields, output } => simulate::handle_balanced(fields, output, &config)
            .inspect_err(|e| log_failure("Balanced", e)),
        Commands::Unbalanced {
            fields,
            output,
            lenient_load_types,
        } => simulate::handle_unbalanced(fields, output, *lenient_load_types, &config)
            .inspect_err(|e| log_failure("Unbalanced", e)),
        Commands::Run {
            scenario,
            output,
            lenient_load_types,
        } => simulate::handle_run(scenario, output, *lenient_load_types, &config)
            .inspect_err(|e| log_failure("Run", e)),
        Commands::Completions { shell, out } => completions::handle(*shell, out.as_deref())
            .map(|_| info!("Completions generated"))
            .inspect_err(|e| log_failure("Completions", e)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
