//! Fuzz target for data.json snapshot parsing.
//!
//! Tests that snapshot deserialization handles arbitrary JSON without
//! panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rk_bundle::DataSnapshot;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<DataSnapshot>(data);
});
