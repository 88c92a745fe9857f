//! Main Assay struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{Loader, LoaderConfig, SourceMetadata};
use crate::profile::{Profiler, ProfilerConfig, Report};

/// Configuration for an Assay run.
#[derive(Debug, Clone)]
pub struct AssayConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Profiler configuration.
    pub profiler: ProfilerConfig,
}

impl Default for AssayConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            profiler: ProfilerConfig::default(),
        }
    }
}

/// Result of profiling a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Per-column quality profiles.
    pub report: Report,
}

/// The main profiling engine: load, then profile, one pass.
pub struct Assay {
    loader: Loader,
    profiler: Profiler,
}

impl Assay {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(AssayConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: AssayConfig) -> Self {
        Self {
            loader: Loader::with_config(config.loader),
            profiler: Profiler::with_config(config.profiler),
        }
    }

    /// Load a file and profile every column.
    ///
    /// Any load failure aborts the run before profiling; the profiler
    /// itself cannot fail.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let (dataset, source) = self.loader.load(path)?;
        let report = self.profiler.profile(&dataset);

        Ok(AnalysisResult { source, report })
    }
}

impl Default for Assay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{Builder, NamedTempFile};

    use super::*;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_analyze_flags_quality_issues() {
        let content = "id,status\n1,active\n2,active\n3,\n4,null\n";
        let file = create_test_file(content);

        let result = Assay::new().analyze(file.path()).unwrap();

        assert_eq!(result.source.row_count, 4);
        assert_eq!(result.source.column_count, 2);
        assert_eq!(result.report.len(), 1);

        let status = &result.report.columns[0];
        assert_eq!(status.column_name, "status");
        assert_eq!(status.empty_count, 1);
        assert_eq!(status.null_string_count, 1);
        assert_eq!(status.duplicate_count, 2);
        assert_eq!(status.unique_count, 1);
    }

    #[test]
    fn test_analyze_clean_file_yields_empty_report() {
        let content = "sample_id,age\nS001,25\nS002,30\nS003,28\n";
        let file = create_test_file(content);

        let result = Assay::new().analyze(file.path()).unwrap();
        assert!(result.report.is_empty());
        assert_eq!(result.source.column_count, 2);
    }

    #[test]
    fn test_analyze_honors_profiler_config() {
        let content = "sample_id\nS001\nS002\n";
        let file = create_test_file(content);

        let assay = Assay::with_config(AssayConfig {
            profiler: ProfilerConfig {
                include_clean_columns: true,
            },
            ..Default::default()
        });
        let result = assay.analyze(file.path()).unwrap();
        assert_eq!(result.report.len(), 1);
    }

    #[test]
    fn test_analyze_missing_file() {
        let err = Assay::new().analyze("/no/such/input.csv").unwrap_err();
        assert!(matches!(
            err,
            crate::error::AssayError::FileNotFound { .. }
        ));
    }
}
