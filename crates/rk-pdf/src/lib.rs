//! Rasterized PDF rendering pipeline.
//!
//! Turns a title + Markdown/plain-text body into a multi-page A4 PDF. The
//! pipeline deliberately avoids a text-based PDF writer's font-embedding
//! limitations: styled text is rasterized through system fonts into one tall
//! grayscale image, which is then sliced into page-sized segments and placed
//! as full-width images. CJK and Latin render identically well; in exchange,
//! page breaks fall on pixel rows and may split a line mid-glyph-row.
//!
//! Stages:
//! 1. Tokenize the body ([`rk_markdown`]), optionally prepending a title
//!    block (title, generation timestamp, rule).
//! 2. Lay out tokens at a fixed logical content width ([`layout`]).
//! 3. Rasterize the laid-out lines ([`raster`]).
//! 4. Slice the raster into page segments ([`paginate`]).
//! 5. Assemble the PDF document ([`document`]).

pub mod document;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod paginate;
pub mod raster;

pub use error::{PdfError, Result};
pub use fonts::FontSet;
pub use paginate::RenderedPage;
pub use raster::RasterImage;

use chrono::Utc;
use rk_markdown::Block;
use tracing::debug;

/// A4 page geometry and raster scale.
///
/// 5 px/mm puts the A4 content box (15 mm margins) at 900x1335 px per page.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;
pub const PX_PER_MM: f32 = 5.0;
pub const RASTER_DPI: f32 = 25.4 * PX_PER_MM;
pub const CONTENT_WIDTH_PX: u32 = ((PAGE_WIDTH_MM - 2.0 * MARGIN_MM) * PX_PER_MM) as u32;
pub const PAGE_CONTENT_PX: u32 = ((PAGE_HEIGHT_MM - 2.0 * MARGIN_MM) * PX_PER_MM) as u32;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prepend a title block (title, generation timestamp, rule) when the
    /// title is non-empty.
    pub title_block: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { title_block: true }
    }
}

/// The rasterizing PDF renderer.
///
/// Holds discovered fonts; one renderer can serve many render calls. Each
/// call builds its own buffers, so concurrent use needs no coordination.
pub struct RasterPdfRenderer {
    fonts: FontSet,
    options: RenderOptions,
}

impl RasterPdfRenderer {
    /// Create a renderer with system-discovered fonts.
    ///
    /// Fails with [`PdfError::FontUnavailable`] when no sans-serif font can
    /// be found; callers surface that as a render failure.
    pub fn new() -> Result<Self> {
        Ok(Self {
            fonts: FontSet::discover()?,
            options: RenderOptions::default(),
        })
    }

    /// Create a renderer with explicit fonts.
    pub fn with_fonts(fonts: FontSet) -> Self {
        Self {
            fonts,
            options: RenderOptions::default(),
        }
    }

    /// Override rendering options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render to in-memory PDF bytes (for packaging).
    pub fn render_to_bytes(&self, title: &str, body: &str) -> Result<Vec<u8>> {
        let blocks = self.build_blocks(title, body);
        let layout = layout::layout_blocks(&blocks, &self.fonts, CONTENT_WIDTH_PX);
        let image = raster::render(&layout, &self.fonts, CONTENT_WIDTH_PX)?;
        let pages = paginate::paginate(&image, PAGE_CONTENT_PX);

        debug!(
            title,
            raster_height = image.height,
            pages = pages.len(),
            "Rendered PDF raster"
        );

        document::build_document(title, &pages)
    }

    fn build_blocks(&self, title: &str, body: &str) -> Vec<Block> {
        let mut blocks = Vec::new();

        if self.options.title_block && !title.trim().is_empty() {
            blocks.push(Block::Heading {
                level: 1,
                spans: rk_markdown::parse_inline(title),
            });
            let stamp = format!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));
            blocks.push(Block::Paragraph {
                lines: vec![rk_markdown::parse_inline(&stamp)],
            });
            blocks.push(Block::Rule);
        }

        blocks.extend(rk_markdown::tokenize(body));
        blocks
    }
}

impl rk_common::PdfEngine for RasterPdfRenderer {
    fn render_pdf(&self, title: &str, body: &str) -> rk_common::Result<Vec<u8>> {
        self.render_to_bytes(title, body).map_err(Into::into)
    }
}
