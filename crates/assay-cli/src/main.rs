//! Assay CLI - column-by-column data quality profiler.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json);

    let result = commands::profile::run(cli.input, cli.output, cli.json, cli.verbose);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the log subscriber. Logging is best-effort and never aborts
/// the run; with `--json` it stays off so stdout carries only the report.
fn init_logging(verbose: bool, json_output: bool) {
    if json_output {
        return;
    }

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
