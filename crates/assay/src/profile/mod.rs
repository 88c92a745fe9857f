//! Column profiling: per-cell classification and quality aggregation.

mod classify;
mod profiler;

pub use classify::{CellClass, NULL_TOKEN, ValueKey, classify};
pub use profiler::{ColumnProfile, Profiler, ProfilerConfig, Report};
