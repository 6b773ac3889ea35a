//! `intervalgen`: generate integration intervals and write them to storage.

mod args;
mod error;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use interval_core::constants::ARGUMENT_NAMES;
use interval_core::storage::backend_for;
use interval_core::stream::run_job;
use tracing::debug;

use crate::args::Args;
use crate::error::{CliError, CliResult};

fn usage() -> String {
    let names: Vec<String> = ARGUMENT_NAMES.iter().map(|n| format!("<{n}>")).collect();
    format!("Usage: intervalgen {}", names.join(" "))
}

fn run(args: Args) -> CliResult<()> {
    let config = args.to_config()?;
    let backend = backend_for(&config)?;

    let snapshot = run_job(&config, backend.as_ref())?;

    if args.telemetry {
        let json = snapshot.to_json().context("serialize telemetry snapshot")?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_tracing(&args.log_level) {
        return report(e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "job failed");
            report(e)
        }
    }
}

fn report(e: CliError) -> ExitCode {
    eprintln!("error: {e:#}");
    if matches!(e, CliError::Usage(_)) {
        eprintln!("{}", usage());
    }
    e.exit_code()
}
