//! Fuzz target for zip bundle reading.
//!
//! Tests that bundle parsing handles arbitrary input without panicking.
//! Bundles may be re-opened from disk after arbitrary corruption.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rk_bundle::BundleReader;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut reader) = BundleReader::from_bytes(data.to_vec()) {
        for name in reader.file_names() {
            let _ = reader.read(&name);
        }
        let _ = reader.read_snapshot();
    }
});
