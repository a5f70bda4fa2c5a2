//! Error types for PDF rendering.

use thiserror::Error;

/// Errors that can occur during PDF rendering.
///
/// A render error fails the whole document; callers decide whether that
/// aborts (single-file export) or is skipped (bundle packaging).
#[derive(Error, Debug)]
pub enum PdfError {
    /// No usable font could be discovered or loaded.
    #[error("no usable font: {0}")]
    FontUnavailable(String),

    /// Glyph rasterization failed.
    #[error("rasterization failed: {0}")]
    Raster(String),

    /// PDF document assembly error.
    #[error("PDF document error: {0}")]
    Document(#[from] printpdf::Error),
}

/// Result type alias for PDF rendering operations.
pub type Result<T> = std::result::Result<T, PdfError>;

impl From<PdfError> for rk_common::Error {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::FontUnavailable(msg) => rk_common::Error::FontUnavailable(msg),
            other => rk_common::Error::Render(other.to_string()),
        }
    }
}
