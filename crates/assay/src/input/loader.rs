//! File loading front door: format dispatch, provenance, metadata.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::encoding;
use super::parquet::read_parquet;
use super::parser::{detect_delimiter, parse_text};
use super::source::{Dataset, SourceMetadata};
use crate::error::{AssayError, Result};

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Delimiter to use for text input (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether text input has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character for text input.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Loads tabular data files by extension.
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a new loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return the dataset and its source metadata.
    ///
    /// Dispatches on the extension: `.csv` takes the delimited-text path,
    /// `.parquet` the columnar path; anything else is unsupported. The
    /// existence check runs before any read so a missing file is reported
    /// as such rather than as an IO failure.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(AssayError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        info!(path = %path.display(), "reading file");

        match extension.as_str() {
            "csv" => self.load_text(path),
            "parquet" => self.load_parquet(path),
            _ => Err(AssayError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn load_text(&self, path: &Path) -> Result<(Dataset, SourceMetadata)> {
        let contents = read_contents(path)?;
        let hash = hash_contents(&contents);
        let size_bytes = contents.len() as u64;

        let detected = encoding::detect_encoding(&contents);
        let text = encoding::decode(&contents, detected, path)?;
        debug!(encoding = detected.name(), "detected encoding");

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&text)?,
        };
        debug!(delimiter = %(delimiter as char), "using delimiter");

        let columns = parse_text(&text, delimiter, &self.config)?;
        let dataset = Dataset::new(columns);

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            detected.name().to_ascii_lowercase(),
            dataset.row_count,
            dataset.column_count(),
        );

        info!(
            rows = dataset.row_count,
            columns = dataset.column_count(),
            "loaded dataset"
        );

        Ok((dataset, metadata))
    }

    fn load_parquet(&self, path: &Path) -> Result<(Dataset, SourceMetadata)> {
        let contents = read_contents(path)?;
        let hash = hash_contents(&contents);
        let size_bytes = contents.len() as u64;

        let columns = read_parquet(path, &self.config)?;
        let dataset = Dataset::new(columns);

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            "parquet".to_string(),
            "binary".to_string(),
            dataset.row_count,
            dataset.column_count(),
        );

        info!(
            rows = dataset.row_count,
            columns = dataset.column_count(),
            "loaded dataset"
        );

        Ok((dataset, metadata))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the whole file for hashing and parsing.
fn read_contents(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| AssayError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(|e| AssayError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(contents)
}

fn hash_contents(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    format!("sha256:{:x}", hasher.finalize())
}
