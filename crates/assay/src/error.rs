//! Error types for the Assay library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Assay operations.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Input path does not exist or is not a regular file.
    #[error("The file '{path}' does not exist")]
    FileNotFound { path: PathBuf },

    /// File extension is neither a recognized text nor columnar format.
    #[error("Unsupported file format for '{path}': expected .csv or .parquet")]
    UnsupportedFormat { path: PathBuf },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text input could not be decoded with the detected encoding.
    #[error("Decode error for '{path}': malformed {encoding} input")]
    Decode { path: PathBuf, encoding: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the Parquet reader.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Error from the Arrow layer.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Input with no columns at all.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;
