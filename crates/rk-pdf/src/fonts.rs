//! System font discovery and glyph resolution.
//!
//! Fonts are discovered through font-kit: a sans-serif regular face plus
//! optional bold/italic variants, and a list of CJK fallback faces tried
//! when the primary faces lack a glyph. Rendering CJK through fallbacks is
//! the whole point of the raster pipeline, so discovery failures for the
//! fallbacks are tolerated silently; only a missing regular face is fatal.

use crate::error::{PdfError, Result};
use font_kit::family_name::FamilyName;
use font_kit::font::Font;
use font_kit::properties::{Properties, Style, Weight};
use font_kit::source::SystemSource;
use tracing::debug;

/// CJK families commonly present on Linux/macOS/Windows systems, tried in
/// order when the primary faces miss a glyph.
const CJK_FALLBACK_FAMILIES: &[&str] = &[
    "Noto Sans CJK SC",
    "Noto Sans CJK TC",
    "Noto Sans CJK JP",
    "Source Han Sans SC",
    "WenQuanYi Micro Hei",
    "PingFang SC",
    "Microsoft YaHei",
];

/// Width assumed for glyphs no loaded face can supply, in em units.
const MISSING_GLYPH_EM: f32 = 0.6;

/// Text style requested for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceStyle {
    pub bold: bool,
    pub italic: bool,
}

/// The set of faces a render call draws from.
pub struct FontSet {
    regular: Font,
    bold: Option<Font>,
    italic: Option<Font>,
    fallbacks: Vec<Font>,
}

impl FontSet {
    /// Discover system fonts.
    ///
    /// The regular sans-serif face is required; bold and italic variants
    /// and CJK fallbacks are best-effort.
    pub fn discover() -> Result<Self> {
        let source = SystemSource::new();

        let regular = select(&source, FamilyName::SansSerif, Weight::NORMAL, Style::Normal)
            .ok_or_else(|| {
                PdfError::FontUnavailable("no sans-serif font found on this system".to_string())
            })?;
        let bold = select(&source, FamilyName::SansSerif, Weight::BOLD, Style::Normal);
        let italic = select(&source, FamilyName::SansSerif, Weight::NORMAL, Style::Italic);

        let mut fallbacks = Vec::new();
        for family in CJK_FALLBACK_FAMILIES {
            if let Some(font) = select(
                &source,
                FamilyName::Title((*family).to_string()),
                Weight::NORMAL,
                Style::Normal,
            ) {
                // select_best_match substitutes freely; only keep real hits.
                if font.family_name().eq_ignore_ascii_case(family) {
                    fallbacks.push(font);
                }
            }
        }

        debug!(
            regular = %regular.family_name(),
            bold = bold.is_some(),
            italic = italic.is_some(),
            fallbacks = fallbacks.len(),
            "Discovered fonts"
        );

        Ok(Self {
            regular,
            bold,
            italic,
            fallbacks,
        })
    }

    /// Build a font set from explicit faces (tests, embedders).
    pub fn from_faces(regular: Font, bold: Option<Font>, italic: Option<Font>) -> Self {
        Self {
            regular,
            bold,
            italic,
            fallbacks: Vec::new(),
        }
    }

    /// The primary face for a style, falling back to regular.
    fn face(&self, style: FaceStyle) -> &Font {
        match (style.bold, style.italic) {
            (true, _) => self.bold.as_ref().unwrap_or(&self.regular),
            (false, true) => self.italic.as_ref().unwrap_or(&self.regular),
            _ => &self.regular,
        }
    }

    /// Resolve a character to a (face, glyph id) pair, trying the styled
    /// face, the regular face, then the CJK fallbacks.
    pub fn resolve(&self, c: char, style: FaceStyle) -> Option<(&Font, u32)> {
        let primary = self.face(style);
        if let Some(glyph) = primary.glyph_for_char(c) {
            if glyph != 0 {
                return Some((primary, glyph));
            }
        }
        if let Some(glyph) = self.regular.glyph_for_char(c) {
            if glyph != 0 {
                return Some((&self.regular, glyph));
            }
        }
        for font in &self.fallbacks {
            if let Some(glyph) = font.glyph_for_char(c) {
                if glyph != 0 {
                    return Some((font, glyph));
                }
            }
        }
        None
    }

    /// Horizontal advance of a character at the given pixel size.
    ///
    /// Unresolvable glyphs get a fixed em fraction so layout and raster
    /// agree on positioning.
    pub fn advance_px(&self, c: char, style: FaceStyle, size_px: f32) -> f32 {
        match self.resolve(c, style) {
            Some((font, glyph)) => {
                let units = font.metrics().units_per_em as f32;
                match font.advance(glyph) {
                    Ok(v) => v.x() / units * size_px,
                    Err(_) => MISSING_GLYPH_EM * size_px,
                }
            }
            None => MISSING_GLYPH_EM * size_px,
        }
    }

    /// Width of a string at the given style and pixel size.
    pub fn measure_px(&self, text: &str, style: FaceStyle, size_px: f32) -> f32 {
        text.chars().map(|c| self.advance_px(c, style, size_px)).sum()
    }

    /// Scaled ascent of the styled face.
    pub fn ascent_px(&self, style: FaceStyle, size_px: f32) -> f32 {
        let metrics = self.face(style).metrics();
        metrics.ascent / metrics.units_per_em as f32 * size_px
    }

    /// Line height: ascent minus descent with a fixed leading factor.
    pub fn line_height_px(&self, style: FaceStyle, size_px: f32) -> f32 {
        let metrics = self.face(style).metrics();
        let units = metrics.units_per_em as f32;
        (metrics.ascent - metrics.descent) / units * size_px * 1.25
    }
}

fn select(source: &SystemSource, family: FamilyName, weight: Weight, style: Style) -> Option<Font> {
    let properties = Properties {
        weight,
        style,
        ..Properties::default()
    };
    source
        .select_best_match(&[family], &properties)
        .ok()
        .and_then(|handle| handle.load().ok())
}
