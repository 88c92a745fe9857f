//! Delimited text parsing with delimiter detection.

use once_cell::sync::Lazy;
use regex::Regex;

use super::loader::LoaderConfig;
use super::source::{Cell, Column, ColumnType};
use crate::error::{AssayError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

// Date-shaped patterns compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(),  // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(),  // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(),  // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(),  // Alt ISO
    ]
});

/// Parse decoded text into columns of `Text` cells.
///
/// Header row is consumed per the config; headerless input gets generated
/// `column_N` names. Short rows are padded with empty fields and extra
/// fields are dropped, so every column ends up the same length.
pub(crate) fn parse_text(text: &str, delimiter: u8, config: &LoaderConfig) -> Result<Vec<Column>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(config.has_header)
        .quote(config.quote)
        .flexible(true)
        .from_reader(text.as_bytes());

    let names: Vec<String> = if config.has_header {
        reader.headers()?.iter().map(|s| s.to_string()).collect()
    } else {
        match reader.records().next() {
            Some(Ok(record)) => (0..record.len())
                .map(|i| format!("column_{}", i + 1))
                .collect(),
            Some(Err(e)) => return Err(e.into()),
            None => Vec::new(),
        }
    };

    if names.is_empty() {
        return Err(AssayError::EmptyData("no columns found".to_string()));
    }

    let expected_cols = names.len();
    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); expected_cols];

    // Re-create the reader since getting the names may have consumed records
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(config.has_header)
        .quote(config.quote)
        .flexible(true)
        .from_reader(text.as_bytes());

    for (row_idx, result) in reader.records().enumerate() {
        if let Some(max) = config.max_rows {
            if row_idx >= max {
                break;
            }
        }

        let record = result?;
        for (col, column_cells) in cells.iter_mut().enumerate() {
            // Pad short rows with empty fields, drop extras
            let value = record.get(col).unwrap_or("");
            column_cells.push(Cell::Text(value.to_string()));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| {
            let declared_type = detect_column_type(&cells);
            Column::new(name, declared_type, cells)
        })
        .collect();

    Ok(columns)
}

/// Detect the delimiter by analyzing the first few lines.
pub(crate) fn detect_delimiter(text: &str) -> Result<u8> {
    let lines: Vec<&str> = text
        .lines()
        .take(10)
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(AssayError::EmptyData("no lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Consistent counts dominate; tab gets a slight bonus as it is
        // less common inside actual field data
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

/// Detect a column's nominal type from its non-blank text values.
///
/// Every non-blank value must agree for a specific type to win; integers
/// promote to float when mixed with floats, and any other mix (or an
/// all-blank column) reports the generic object type.
fn detect_column_type(cells: &[Cell]) -> ColumnType {
    let mut consensus: Option<ColumnType> = None;

    for cell in cells {
        let Cell::Text(raw) = cell else {
            continue;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let detected = detect_value_type(trimmed);
        consensus = match consensus {
            None => Some(detected),
            Some(t) if t == detected => Some(t),
            Some(ColumnType::Integer) if detected == ColumnType::Float => Some(ColumnType::Float),
            Some(ColumnType::Float) if detected == ColumnType::Integer => Some(ColumnType::Float),
            Some(_) => return ColumnType::Object,
        };
    }

    consensus.unwrap_or(ColumnType::Object)
}

/// Detect the type of a single trimmed value.
fn detect_value_type(trimmed: &str) -> ColumnType {
    if matches!(
        trimmed.to_lowercase().as_str(),
        "true" | "false" | "yes" | "no"
    ) {
        return ColumnType::Boolean;
    }

    if trimmed.parse::<i64>().is_ok() {
        return ColumnType::Integer;
    }

    if trimmed.parse::<f64>().is_ok() {
        return ColumnType::Float;
    }

    if DATE_PATTERNS.iter().any(|pattern| pattern.is_match(trimmed)) {
        return ColumnType::Date;
    }

    ColumnType::Object
}
