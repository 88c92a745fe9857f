//! Assay: column-by-column data quality profiling for tabular datasets.
//!
//! Assay loads a delimited text or Parquet file, classifies every cell of
//! every column, and reports per-column quality metrics: missing values,
//! blank and placeholder strings, duplicated values, and cardinality.
//!
//! # Core Principles
//!
//! - **One pass**: load, profile, report, no feedback loop
//! - **Non-destructive**: source data is never modified
//! - **Signal over noise**: columns with nothing to report are omitted
//!
//! # Example
//!
//! ```no_run
//! use assay::Assay;
//!
//! let assay = Assay::new();
//! let result = assay.analyze("data.csv").unwrap();
//!
//! for profile in &result.report.columns {
//!     println!(
//!         "{}: {} nulls, {} duplicates",
//!         profile.column_name, profile.null_count, profile.duplicate_count
//!     );
//! }
//! ```

pub mod error;
pub mod input;
pub mod profile;
pub mod report;

mod assay;

pub use crate::assay::{AnalysisResult, Assay, AssayConfig};
pub use error::{AssayError, Result};
pub use input::{Cell, Column, ColumnType, Dataset, Loader, LoaderConfig, SourceMetadata};
pub use profile::{ColumnProfile, Profiler, ProfilerConfig, Report};
pub use report::{REPORT_HEADER, write_report, write_report_to};
