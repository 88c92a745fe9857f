//! Profile command - analyze a data file and write the quality report.

use std::path::PathBuf;

use assay::{Assay, write_report};
use colored::Colorize;

pub fn run(
    input: PathBuf,
    output: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !json_output {
        println!(
            "{} {}",
            "Profiling".cyan().bold(),
            input.display().to_string().white()
        );
    }

    let assay = Assay::new();
    let result = assay.analyze(&input)?;

    write_report(&result.report, &output)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for profile in &result.report.columns {
            println!(
                "  {:20} {:8} {:>6} null  {:>6} empty  {:>6} duplicate",
                profile.column_name,
                profile.declared_type.to_string(),
                profile.null_count,
                profile.empty_count,
                profile.duplicate_count
            );
        }
        println!();
    }

    println!(
        "{} {}",
        "Saved to".green().bold(),
        output.display().to_string().white()
    );

    println!();
    println!(
        "{} of {} columns flagged for review",
        result.report.len().to_string().white().bold(),
        result.source.column_count
    );

    if result.report.is_empty() {
        println!("{}", "No issues found - data looks clean!".green());
    }

    Ok(())
}
