//! Character encoding detection for delimited text input.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{AssayError, Result};

/// Number of leading bytes examined when sniffing the encoding.
const SNIFF_LEN: usize = 64 * 1024;

/// Pick the encoding for raw text content.
///
/// A byte-order mark wins outright. Otherwise a prefix that validates as
/// UTF-8 selects UTF-8, and anything else falls back to Windows-1252,
/// which maps every byte sequence.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let sample = &bytes[..bytes.len().min(SNIFF_LEN)];
    if utf8_prefix_valid(sample) {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Validate a sample as UTF-8, tolerating a multi-byte sequence cut off
/// at the sample boundary.
fn utf8_prefix_valid(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // error_len() is None only for an incomplete sequence at the end.
        Err(e) => e.error_len().is_none(),
    }
}

/// Decode raw bytes with the given encoding, stripping any BOM.
///
/// Malformed input is an error, not replacement characters.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(AssayError::Decode {
            path: path.to_path_buf(),
            encoding: actual.name().to_string(),
        });
    }
    Ok(text.into_owned())
}
