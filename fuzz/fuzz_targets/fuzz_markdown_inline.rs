//! Fuzz target for inline emphasis parsing.
//!
//! Unmatched and overlapping `*`/`**` markers must never panic or lose
//! input characters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rk_markdown::{parse_inline, Inline};

fuzz_target!(|data: &str| {
    if data.contains('\n') {
        return;
    }
    let spans = parse_inline(data);

    // Every input character survives somewhere in the parsed spans.
    let total: usize = spans
        .iter()
        .map(|s| match s {
            Inline::Text(t) => t.chars().count(),
            Inline::Bold(t) | Inline::Italic(t) => t.chars().count(),
        })
        .sum();
    assert!(total <= data.chars().count());
});
