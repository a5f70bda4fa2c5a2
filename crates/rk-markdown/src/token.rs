//! Line-oriented block tokenization.

use crate::inline::{parse_inline, Inline};
use serde::{Deserialize, Serialize};

/// One block-level token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// `#`, `##`, or `###` heading.
    Heading { level: u8, spans: Vec<Inline> },
    /// `* ` or `- ` bullet line.
    Bullet { spans: Vec<Inline> },
    /// `---` horizontal rule.
    Rule,
    /// Consecutive non-blank lines. A blank line ends the paragraph; each
    /// inner line keeps its own break.
    Paragraph { lines: Vec<Vec<Inline>> },
}

/// Tokenize a Markdown/plain-text body into blocks.
///
/// Decisions are made per line; no construct spans lines. Any input
/// tokenizes without error.
pub fn tokenize(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<Vec<Inline>> = Vec::new();

    for raw_line in input.lines() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        if line.trim().is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            continue;
        }

        if is_rule(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            blocks.push(Block::Rule);
            continue;
        }

        if let Some((level, text)) = heading_line(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            blocks.push(Block::Heading {
                level,
                spans: parse_inline(text),
            });
            continue;
        }

        if let Some(text) = bullet_line(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            blocks.push(Block::Bullet {
                spans: parse_inline(text),
            });
            continue;
        }

        paragraph.push(parse_inline(line.trim_end()));
    }

    flush_paragraph(&mut blocks, &mut paragraph);
    blocks
}

fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<Vec<Inline>>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph {
            lines: std::mem::take(paragraph),
        });
    }
}

fn is_rule(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

fn heading_line(line: &str) -> Option<(u8, &str)> {
    for (prefix, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(text) = line.strip_prefix(prefix) {
            return Some((level, text.trim_end()));
        }
    }
    None
}

fn bullet_line(line: &str) -> Option<&str> {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
        .map(str::trim_end)
}
