//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Assay: column-by-column data quality profiler
#[derive(Parser)]
#[command(name = "assay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the data file (CSV or Parquet)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the CSV quality report
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Print the full analysis as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
