//! Fuzz target for Markdown block tokenization.
//!
//! Tests that the tokenizer handles arbitrary text without panicking.
//! Resume bodies come straight from user uploads and backend responses.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rk_markdown::tokenize;

fuzz_target!(|data: &str| {
    let _ = tokenize(data);
});
