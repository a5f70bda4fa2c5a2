//! Line-oriented Markdown subset tokenizer.
//!
//! The PDF renderer styles artifact bodies using a deliberately small,
//! lexical Markdown subset. This crate makes that subset an explicit
//! tokenizer so its behavior is testable in isolation:
//!
//! - headings `#`, `##`, `###`
//! - bullet lines starting `* ` or `- `
//! - bold `**x**` and italic `*x*`
//! - horizontal rule `---`
//! - paragraph breaks on blank lines, line breaks otherwise
//!
//! Nested or overlapping constructs are out of scope: unmatched markers fall
//! back to literal text, and no input can make tokenization fail.

pub mod inline;
pub mod token;

pub use inline::{parse_inline, Inline};
pub use token::{tokenize, Block};
