//! Token layout: blocks to positioned, wrapped lines.
//!
//! Wrapping happens at Unicode word boundaries, which UAX #29 defines per
//! ideograph for CJK, so Chinese résumés wrap naturally without a shaping
//! engine. A segment wider than the content width is split character by
//! character as a last resort.

use crate::fonts::{FaceStyle, FontSet};
use rk_markdown::{Block, Inline};
use unicode_segmentation::UnicodeSegmentation;

/// Body text size in raster pixels; headings scale up from here.
pub const BODY_SIZE_PX: f32 = 16.0;

const HEADING_SIZES_PX: [f32; 3] = [26.0, 22.0, 19.0];
const HEADING_GAPS_PX: [f32; 3] = [18.0, 14.0, 12.0];
const PARAGRAPH_GAP_PX: f32 = 8.0;
const BULLET_INDENT_PX: f32 = 24.0;
const RULE_GAP_PX: f32 = 10.0;
const RULE_THICKNESS_PX: f32 = 2.0;
const BOTTOM_PAD_PX: f32 = 8.0;

/// One styled run within a line.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRun {
    pub text: String,
    pub style: FaceStyle,
    pub size_px: f32,
}

/// What a laid-out line draws.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Styled text runs starting at `indent_px`.
    Text { runs: Vec<LayoutRun>, indent_px: f32 },
    /// Full-width horizontal rule.
    Rule { thickness_px: f32 },
}

/// One vertical slot of the raster.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub kind: LineKind,
    /// Vertical gap above this line.
    pub gap_before_px: f32,
    /// Baseline offset from the top of the line box (text lines only).
    pub ascent_px: f32,
    /// Height of the line box.
    pub height_px: f32,
}

/// The fully laid-out document.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub lines: Vec<LayoutLine>,
    /// Total raster height in pixels, including gaps and bottom padding.
    pub height_px: u32,
}

/// Lay out blocks at the given content width.
pub fn layout_blocks(blocks: &[Block], fonts: &FontSet, content_width_px: u32) -> Layout {
    let width = content_width_px as f32;
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let idx = (*level).clamp(1, 3) as usize - 1;
                let size = HEADING_SIZES_PX[idx];
                let style = FaceStyle {
                    bold: true,
                    italic: false,
                };
                push_wrapped(
                    &mut lines,
                    fonts,
                    spans,
                    style,
                    size,
                    0.0,
                    width,
                    HEADING_GAPS_PX[idx],
                );
            }
            Block::Bullet { spans } => {
                let mut spans_with_marker = Vec::with_capacity(spans.len() + 1);
                spans_with_marker.push(Inline::Text("• ".to_string()));
                spans_with_marker.extend(spans.iter().cloned());
                push_wrapped(
                    &mut lines,
                    fonts,
                    &spans_with_marker,
                    FaceStyle::default(),
                    BODY_SIZE_PX,
                    BULLET_INDENT_PX,
                    width,
                    4.0,
                );
            }
            Block::Rule => {
                lines.push(LayoutLine {
                    kind: LineKind::Rule {
                        thickness_px: RULE_THICKNESS_PX,
                    },
                    gap_before_px: RULE_GAP_PX,
                    ascent_px: 0.0,
                    height_px: RULE_THICKNESS_PX,
                });
            }
            Block::Paragraph { lines: para_lines } => {
                for (i, spans) in para_lines.iter().enumerate() {
                    let gap = if i == 0 { PARAGRAPH_GAP_PX } else { 0.0 };
                    push_wrapped(
                        &mut lines,
                        fonts,
                        spans,
                        FaceStyle::default(),
                        BODY_SIZE_PX,
                        0.0,
                        width,
                        gap,
                    );
                }
            }
        }
    }

    let height: f32 = lines
        .iter()
        .map(|l| l.gap_before_px + l.height_px)
        .sum::<f32>()
        + BOTTOM_PAD_PX;

    Layout {
        lines,
        height_px: (height.ceil() as u32).max(1),
    }
}

/// One measurable wrap unit: a word-boundary segment with its style.
struct Segment {
    text: String,
    style: FaceStyle,
    width_px: f32,
}

#[allow(clippy::too_many_arguments)]
fn push_wrapped(
    lines: &mut Vec<LayoutLine>,
    fonts: &FontSet,
    spans: &[Inline],
    base_style: FaceStyle,
    size_px: f32,
    indent_px: f32,
    content_width_px: f32,
    gap_before_px: f32,
) {
    let max_width = (content_width_px - indent_px).max(size_px);
    let segments = segment_spans(fonts, spans, base_style, size_px, max_width);

    let ascent = fonts.ascent_px(base_style, size_px);
    let height = fonts.line_height_px(base_style, size_px);

    let mut current: Vec<LayoutRun> = Vec::new();
    let mut current_width = 0.0f32;
    let mut first_line = true;

    let mut flush =
        |current: &mut Vec<LayoutRun>, current_width: &mut f32, first_line: &mut bool| {
            lines.push(LayoutLine {
                kind: LineKind::Text {
                    runs: std::mem::take(current),
                    indent_px,
                },
                gap_before_px: if *first_line { gap_before_px } else { 0.0 },
                ascent_px: ascent,
                height_px: height,
            });
            *current_width = 0.0;
            *first_line = false;
        };

    for seg in segments {
        if current_width + seg.width_px > max_width && !current.is_empty() {
            flush(&mut current, &mut current_width, &mut first_line);
            // A break swallows the leading whitespace segment.
            if seg.text.trim().is_empty() {
                continue;
            }
        }
        current_width += seg.width_px;
        append_run(&mut current, seg, size_px);
    }

    // Always emit at least one line so empty paragraphs keep their slot.
    flush(&mut current, &mut current_width, &mut first_line);
}

/// Break spans into word-boundary segments, pre-splitting any segment wider
/// than the line.
fn segment_spans(
    fonts: &FontSet,
    spans: &[Inline],
    base_style: FaceStyle,
    size_px: f32,
    max_width: f32,
) -> Vec<Segment> {
    let mut segments = Vec::new();

    for span in spans {
        let style = span_style(span, base_style);
        for word in span.content().split_word_bounds() {
            let width = fonts.measure_px(word, style, size_px);
            if width <= max_width {
                segments.push(Segment {
                    text: word.to_string(),
                    style,
                    width_px: width,
                });
            } else {
                for c in word.chars() {
                    segments.push(Segment {
                        text: c.to_string(),
                        style,
                        width_px: fonts.advance_px(c, style, size_px),
                    });
                }
            }
        }
    }

    segments
}

fn span_style(span: &Inline, base: FaceStyle) -> FaceStyle {
    match span {
        Inline::Text(_) => base,
        Inline::Bold(_) => FaceStyle {
            bold: true,
            ..base
        },
        Inline::Italic(_) => FaceStyle {
            italic: true,
            ..base
        },
    }
}

fn append_run(runs: &mut Vec<LayoutRun>, seg: Segment, size_px: f32) {
    if let Some(last) = runs.last_mut() {
        if last.style == seg.style {
            last.text.push_str(&seg.text);
            return;
        }
    }
    runs.push(LayoutRun {
        text: seg.text,
        style: seg.style,
        size_px,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_markdown::tokenize;

    #[test]
    fn test_layout_wraps_long_lines() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let body = "word ".repeat(200);
        let blocks = tokenize(&body);
        let narrow = layout_blocks(&blocks, &fonts, 300);
        let wide = layout_blocks(&blocks, &fonts, 3000);

        assert!(narrow.lines.len() > wide.lines.len());
        assert!(narrow.height_px > wide.height_px);
    }

    #[test]
    fn test_heading_taller_than_body() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let heading = layout_blocks(&tokenize("# Title"), &fonts, 900);
        let body = layout_blocks(&tokenize("Title"), &fonts, 900);
        assert!(heading.height_px > body.height_px);
    }

    #[test]
    fn test_rule_layout() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let layout = layout_blocks(&tokenize("---"), &fonts, 900);
        assert_eq!(layout.lines.len(), 1);
        assert!(matches!(layout.lines[0].kind, LineKind::Rule { .. }));
    }

    #[test]
    fn test_oversized_word_splits_by_char() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let body = "x".repeat(500);
        let layout = layout_blocks(&tokenize(&body), &fonts, 200);
        assert!(layout.lines.len() > 1);
    }

    #[test]
    fn test_empty_input_still_positive_height() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let layout = layout_blocks(&[], &fonts, 900);
        assert!(layout.height_px >= 1);
    }
}
