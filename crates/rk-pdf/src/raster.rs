//! Glyph rasterization into a single grayscale strip.
//!
//! The whole document is drawn into one tall 8-bit canvas first; pagination
//! later slices it by rows. Coverage from the font rasterizer is inverted so
//! the strip reads as dark ink on a white page.

use crate::error::{PdfError, Result};
use crate::fonts::FontSet;
use crate::layout::{Layout, LineKind};
use font_kit::canvas::{Canvas, Format, RasterizationOptions};
use font_kit::hinting::HintingOptions;
use pathfinder_geometry::transform2d::Transform2F;
use pathfinder_geometry::vector::{Vector2F, Vector2I};

const RULE_SHADE: u8 = 64;

/// A rendered grayscale strip, row-major, 255 = white.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Draw a layout into a grayscale strip of the given width.
pub fn render(layout: &Layout, fonts: &FontSet, width_px: u32) -> Result<RasterImage> {
    let width = width_px.max(1);
    let height = layout.height_px.max(1);
    let mut canvas = Canvas::new(Vector2I::new(width as i32, height as i32), Format::A8);

    let mut y = 0.0f32;
    for line in &layout.lines {
        y += line.gap_before_px;
        match &line.kind {
            LineKind::Text { runs, indent_px } => {
                let baseline = y + line.ascent_px;
                let mut pen = *indent_px;
                for run in runs {
                    for c in run.text.chars() {
                        if !c.is_whitespace() {
                            if let Some((font, glyph)) = fonts.resolve(c, run.style) {
                                font.rasterize_glyph(
                                    &mut canvas,
                                    glyph,
                                    run.size_px,
                                    Transform2F::from_translation(Vector2F::new(pen, baseline)),
                                    HintingOptions::None,
                                    RasterizationOptions::GrayscaleAa,
                                )
                                .map_err(|e| PdfError::Raster(e.to_string()))?;
                            }
                        }
                        pen += fonts.advance_px(c, run.style, run.size_px);
                    }
                }
            }
            LineKind::Rule { thickness_px } => {
                fill_rows(&mut canvas, y, *thickness_px, width);
            }
        }
        y += line.height_px;
    }

    // Invert coverage: 0 coverage is a white page pixel.
    let stride = canvas.stride;
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for row in 0..height as usize {
        let start = row * stride;
        pixels.extend(
            canvas.pixels[start..start + width as usize]
                .iter()
                .map(|&v| 255 - v),
        );
    }

    Ok(RasterImage {
        width,
        height,
        pixels,
    })
}

fn fill_rows(canvas: &mut Canvas, top: f32, thickness: f32, width: u32) {
    let height = canvas.size.y() as usize;
    let start = (top as usize).min(height);
    let end = ((top + thickness).ceil() as usize).min(height);
    for row in start..end {
        let offset = row * canvas.stride;
        for px in &mut canvas.pixels[offset..offset + width as usize] {
            *px = (*px).max(255 - RULE_SHADE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_blocks;
    use rk_markdown::tokenize;

    #[test]
    fn test_render_paints_ink() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let layout = layout_blocks(&tokenize("# Hello"), &fonts, 400);
        let image = render(&layout, &fonts, 400).unwrap();

        assert_eq!(image.width, 400);
        assert_eq!(image.height, layout.height_px);
        assert_eq!(image.pixels.len(), (400 * image.height) as usize);
        assert!(image.pixels.iter().any(|&p| p < 200), "no ink was drawn");
    }

    #[test]
    fn test_render_empty_layout_is_blank() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let layout = layout_blocks(&[], &fonts, 100);
        let image = render(&layout, &fonts, 100).unwrap();
        assert!(image.pixels.iter().all(|&p| p == 255));
    }

    #[test]
    fn test_rule_draws_dark_band() {
        let Ok(fonts) = FontSet::discover() else {
            return;
        };

        let layout = layout_blocks(&tokenize("---"), &fonts, 100);
        let image = render(&layout, &fonts, 100).unwrap();
        assert!(image.pixels.iter().any(|&p| p == RULE_SHADE));
    }
}
