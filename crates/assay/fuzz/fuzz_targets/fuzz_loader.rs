//! Fuzz target for the file loader.
//!
//! This fuzzer tests that the CSV loading path:
//! 1. Never panics on malformed input
//! 2. Handles arbitrary byte sequences in any encoding
//! 3. Survives pathological delimiter and quote placement

#![no_main]

use assay::Loader;
use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    // Write to temp file so the loader sees a recognized extension
    if let Ok(mut temp_file) = tempfile::NamedTempFile::with_suffix(".csv") {
        if temp_file.write_all(data).is_ok() {
            let path = temp_file.path();

            let loader = Loader::new();
            let _ = loader.load(path);
        }
    }
});
