//! Fuzz target for encoding detection.
//!
//! This fuzzer tests that encoding detection and decoding:
//! 1. Never panic on arbitrary byte sequences
//! 2. Handle truncated multi-byte sequences at the sniff boundary
//! 3. Always produce a decodable result under the windows-1252 fallback

#![no_main]

use assay::input::{decode, detect_encoding};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 1_000_000 {
        return;
    }

    let encoding = detect_encoding(data);
    let _ = decode(data, encoding, std::path::Path::new("fuzz.csv"));
});
