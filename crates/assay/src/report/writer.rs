//! Report sink: fixed-header delimited output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{AssayError, Result};
use crate::profile::Report;

/// Report header. Written even when every column was filtered out, so
/// the output file is always well-formed.
pub const REPORT_HEADER: [&str; 8] = [
    "Column",
    "Null Values",
    "Null String Values",
    "Duplicate Values",
    "Empty Values",
    "Unique Values",
    "Total Records",
    "Time Taken (seconds)",
];

/// Write the report as a CSV file at `destination`.
pub fn write_report(report: &Report, destination: impl AsRef<Path>) -> Result<()> {
    let destination = destination.as_ref();
    let file = File::create(destination).map_err(|e| AssayError::Io {
        path: destination.to_path_buf(),
        source: e,
    })?;

    write_report_to(report, file)?;

    info!(path = %destination.display(), columns = report.len(), "report written");
    Ok(())
}

/// Write the report to any writer. Used directly by tests.
pub fn write_report_to<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;
    for profile in &report.columns {
        csv_writer.write_record(&[
            profile.column_name.clone(),
            profile.null_count.to_string(),
            profile.null_string_count.to_string(),
            profile.duplicate_count.to_string(),
            profile.empty_count.to_string(),
            profile.unique_count.to_string(),
            profile.total_records.to_string(),
            profile.elapsed_seconds.to_string(),
        ])?;
    }

    csv_writer.flush().map_err(|e| AssayError::Csv(e.into()))?;
    Ok(())
}
