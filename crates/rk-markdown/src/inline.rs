//! Inline emphasis parsing.
//!
//! A single left-to-right lexical scan. `**` pairs win over `*` pairs; an
//! unmatched marker is literal text. Emphasis never nests.

use serde::{Deserialize, Serialize};

/// One inline span of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
}

impl Inline {
    /// The span's raw text content, without markers.
    pub fn content(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Bold(s) | Inline::Italic(s) => s,
        }
    }
}

/// Parse a single line into inline spans.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                flush_literal(&mut spans, &mut literal);
                spans.push(Inline::Bold(after[..end].to_string()));
                rest = &after[end + 2..];
                continue;
            }
        }

        if let Some(after) = rest.strip_prefix('*') {
            // Require non-empty content so a dangling `**` is not read as
            // an empty italic.
            match after.find('*') {
                Some(end) if end > 0 => {
                    flush_literal(&mut spans, &mut literal);
                    spans.push(Inline::Italic(after[..end].to_string()));
                    rest = &after[end + 1..];
                    continue;
                }
                _ => {}
            }
        }

        let ch = rest.chars().next().expect("rest is non-empty");
        literal.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush_literal(&mut spans, &mut literal);
    spans
}

fn flush_literal(spans: &mut Vec<Inline>, literal: &mut String) {
    if !literal.is_empty() {
        spans.push(Inline::Text(std::mem::take(literal)));
    }
}
