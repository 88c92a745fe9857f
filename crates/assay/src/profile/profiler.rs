//! Column-by-column quality aggregation.

use std::time::Instant;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::classify::{CellClass, ValueKey, classify};
use crate::error::Result;
use crate::input::{Column, ColumnType, Dataset};

/// Profiler configuration.
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Keep columns with no quality findings in the report.
    pub include_clean_columns: bool,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            include_clean_columns: false,
        }
    }
}

/// Quality metrics for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name as loaded.
    pub column_name: String,
    /// Nominal scalar type reported by the loader.
    pub declared_type: ColumnType,
    /// Row count of the dataset the column came from.
    pub total_records: usize,
    /// Cells with no value present.
    pub null_count: usize,
    /// Text cells spelling out the "null" placeholder.
    pub null_string_count: usize,
    /// Text cells trimming to the empty string.
    pub empty_count: usize,
    /// Substantive cells whose value occurs more than once, every
    /// occurrence counted.
    pub duplicate_count: usize,
    /// Distinct substantive values.
    pub unique_count: usize,
    /// Wall-clock seconds spent on this column.
    pub elapsed_seconds: f64,
}

impl ColumnProfile {
    /// Whether the column shows no quality findings at all: nothing
    /// missing, nothing blank, no placeholders, no repeats, and every
    /// row a distinct value.
    pub fn is_clean(&self) -> bool {
        self.null_count == 0
            && self.empty_count == 0
            && self.null_string_count == 0
            && self.duplicate_count == 0
            && self.unique_count == self.total_records
    }
}

/// Ordered per-column profiles for one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Retained profiles, in dataset column order.
    pub columns: Vec<ColumnProfile>,
}

impl Report {
    /// Number of retained columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether every column was filtered out.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Profiles datasets column by column.
pub struct Profiler {
    config: ProfilerConfig,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        Self { config }
    }

    /// Profile every column, in order.
    ///
    /// Deterministic in everything but `elapsed_seconds`; performs no I/O
    /// and has nothing to fail. Columns with no findings are omitted
    /// unless the config keeps them.
    pub fn profile(&self, dataset: &Dataset) -> Report {
        let columns = dataset
            .columns
            .iter()
            .map(|column| profile_column(column, dataset.row_count))
            .filter(|profile| self.config.include_clean_columns || !profile.is_clean())
            .collect();

        Report { columns }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate quality metrics for a single column.
fn profile_column(column: &Column, total_records: usize) -> ColumnProfile {
    let started = Instant::now();

    let mut null_count = 0;
    let mut empty_count = 0;
    let mut null_string_count = 0;
    let mut value_counts: IndexMap<ValueKey<'_>, usize> = IndexMap::new();

    for cell in &column.cells {
        match classify(cell) {
            CellClass::Null => null_count += 1,
            CellClass::Empty => empty_count += 1,
            CellClass::NullLiteral => null_string_count += 1,
            CellClass::Substantive(key) => {
                *value_counts.entry(key).or_insert(0) += 1;
            }
        }
    }

    let unique_count = value_counts.len();
    // Every occurrence of a repeated value counts, not just the extras
    let duplicate_count = value_counts.values().copied().filter(|&n| n >= 2).sum();

    ColumnProfile {
        column_name: column.name.clone(),
        declared_type: column.declared_type,
        total_records,
        null_count,
        null_string_count,
        empty_count,
        duplicate_count,
        unique_count,
        elapsed_seconds: started.elapsed().as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Cell;

    fn text_column(name: &str, values: &[&str]) -> Column {
        Column::new(
            name,
            ColumnType::Object,
            values.iter().map(|v| Cell::Text(v.to_string())).collect(),
        )
    }

    #[test]
    fn test_mixed_quality_column() {
        // 6 rows: two substantive "2"s, one empty, one placeholder, one null
        let column = Column::new(
            "id",
            ColumnType::Object,
            vec![
                Cell::Text("1".to_string()),
                Cell::Text("2".to_string()),
                Cell::Text("2".to_string()),
                Cell::Text("".to_string()),
                Cell::Text("null".to_string()),
                Cell::Null,
            ],
        );
        let dataset = Dataset::new(vec![column]);
        let report = Profiler::new().profile(&dataset);

        assert_eq!(report.len(), 1);
        let profile = &report.columns[0];
        assert_eq!(profile.column_name, "id");
        assert_eq!(profile.total_records, 6);
        assert_eq!(profile.null_count, 1);
        assert_eq!(profile.empty_count, 1);
        assert_eq!(profile.null_string_count, 1);
        assert_eq!(profile.unique_count, 2);
        assert_eq!(profile.duplicate_count, 2);
        assert!(profile.elapsed_seconds >= 0.0);
    }

    #[test]
    fn test_clean_column_is_omitted() {
        let dataset = Dataset::new(vec![text_column("k", &["a", "b", "c"])]);
        let report = Profiler::new().profile(&dataset);
        assert!(report.is_empty());
    }

    #[test]
    fn test_clean_column_kept_when_configured() {
        let dataset = Dataset::new(vec![text_column("k", &["a", "b", "c"])]);
        let profiler = Profiler::with_config(ProfilerConfig {
            include_clean_columns: true,
        });
        let report = profiler.profile(&dataset);

        assert_eq!(report.len(), 1);
        assert_eq!(report.columns[0].unique_count, 3);
        assert_eq!(report.columns[0].duplicate_count, 0);
    }

    #[test]
    fn test_duplicates_count_every_occurrence() {
        let dataset = Dataset::new(vec![text_column("x", &["v", "v", "v"])]);
        let report = Profiler::new().profile(&dataset);

        let profile = &report.columns[0];
        assert_eq!(profile.unique_count, 1);
        assert_eq!(profile.duplicate_count, 3);
    }

    #[test]
    fn test_trimmed_values_collide() {
        let dataset = Dataset::new(vec![text_column("x", &[" a ", "a", "b"])]);
        let report = Profiler::new().profile(&dataset);

        let profile = &report.columns[0];
        assert_eq!(profile.unique_count, 2);
        assert_eq!(profile.duplicate_count, 2);
    }

    #[test]
    fn test_zero_row_dataset_is_all_clean() {
        let dataset = Dataset::new(vec![text_column("a", &[]), text_column("b", &[])]);
        assert_eq!(dataset.row_count, 0);

        let report = Profiler::new().profile(&dataset);
        assert!(report.is_empty());
    }

    #[test]
    fn test_zero_column_dataset() {
        let report = Profiler::new().profile(&Dataset::new(vec![]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_column_order_preserved() {
        let dataset = Dataset::new(vec![
            text_column("first", &["x", "x"]),
            text_column("clean", &["a", "b"]),
            text_column("last", &["", "y"]),
        ]);
        let report = Profiler::new().profile(&dataset);

        let names: Vec<&str> = report.columns.iter().map(|p| p.column_name.as_str()).collect();
        assert_eq!(names, vec!["first", "last"]);
    }

    #[test]
    fn test_typed_cells_count_naturally() {
        let column = Column::new(
            "n",
            ColumnType::Integer,
            vec![
                Cell::Integer(1),
                Cell::Integer(1),
                Cell::Null,
                Cell::Integer(3),
            ],
        );
        let report = Profiler::new().profile(&Dataset::new(vec![column]));

        let profile = &report.columns[0];
        assert_eq!(profile.null_count, 1);
        assert_eq!(profile.unique_count, 2);
        assert_eq!(profile.duplicate_count, 2);
        assert_eq!(profile.declared_type, ColumnType::Integer);
    }

    #[test]
    fn test_deterministic_except_elapsed() {
        let dataset = Dataset::new(vec![text_column("x", &["a", "a", "", "null"])]);
        let profiler = Profiler::new();

        let first = profiler.profile(&dataset);
        let second = profiler.profile(&dataset);

        let a = &first.columns[0];
        let b = &second.columns[0];
        assert_eq!(a.null_count, b.null_count);
        assert_eq!(a.empty_count, b.empty_count);
        assert_eq!(a.null_string_count, b.null_string_count);
        assert_eq!(a.duplicate_count, b.duplicate_count);
        assert_eq!(a.unique_count, b.unique_count);
    }

    #[test]
    fn test_report_json_round_trip() {
        let dataset = Dataset::new(vec![text_column("x", &["a", "a"])]);
        let report = Profiler::new().profile(&dataset);

        let json = report.to_json().unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.columns[0].duplicate_count, 2);
    }
}
