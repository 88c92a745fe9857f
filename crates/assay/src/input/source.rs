//! In-memory dataset representation and source metadata.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single cell value as loaded from the source.
///
/// `Null` means the source recorded no value at all (a Parquet validity
/// bitmap null). A parsed-but-blank text field stays `Text("")`; blankness
/// is a classification concern, not a loading concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value present in the source.
    Null,
    /// A string value, possibly empty or whitespace-only.
    Text(String),
    /// A 64-bit integer value.
    Integer(i64),
    /// A 64-bit floating point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
}

impl Cell {
    /// Whether the source recorded no value for this cell.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// Nominal scalar type of a column, as reported by the loader.
///
/// `Object` covers plain strings and mixed-type columns, matching what
/// dataframe loaders report for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Date,
    Object,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::Object => "object",
        };
        write!(f, "{}", s)
    }
}

/// A named column of cells with its loader-reported type.
#[derive(Debug, Clone)]
pub struct Column {
    /// Column name, unique within the dataset.
    pub name: String,
    /// Nominal scalar type reported by the loader.
    pub declared_type: ColumnType,
    /// Cell values, one per row.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, declared_type: ColumnType, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            declared_type,
            cells,
        }
    }
}

/// Parsed tabular data: an ordered sequence of equal-length columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Columns in source order.
    pub columns: Vec<Column>,
    /// Number of data rows shared by every column.
    pub row_count: usize,
}

impl Dataset {
    /// Create a dataset from loader output.
    ///
    /// The loader guarantees every column holds the same number of cells;
    /// the row count is taken from the first column (zero if there are
    /// no columns).
    pub fn new(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map(|c| c.cells.len()).unwrap_or(0);
        Self { columns, row_count }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, parquet, etc.).
    pub format: String,
    /// Detected encoding ("binary" for columnar input).
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        encoding: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_row_count_from_first_column() {
        let dataset = Dataset::new(vec![Column::new(
            "a",
            ColumnType::Object,
            vec![Cell::Text("x".to_string()), Cell::Null],
        )]);
        assert_eq!(dataset.row_count, 2);
        assert_eq!(dataset.column_count(), 1);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(vec![]);
        assert_eq!(dataset.row_count, 0);
        assert_eq!(dataset.column_count(), 0);
    }

    #[test]
    fn test_column_by_name() {
        let dataset = Dataset::new(vec![
            Column::new("id", ColumnType::Integer, vec![Cell::Integer(1)]),
            Column::new("name", ColumnType::Object, vec![Cell::Text("a".to_string())]),
        ]);
        assert!(dataset.column_by_name("name").is_some());
        assert!(dataset.column_by_name("missing").is_none());
    }

    #[test]
    fn test_metadata_derives_file_name() {
        let meta = SourceMetadata::new(
            PathBuf::from("/data/input.csv"),
            "sha256:abc".to_string(),
            42,
            "csv".to_string(),
            "utf-8".to_string(),
            10,
            3,
        );
        assert_eq!(meta.file, "input.csv");
        assert_eq!(meta.row_count, 10);
    }

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::Integer.to_string(), "integer");
        assert_eq!(ColumnType::Object.to_string(), "object");
    }
}
