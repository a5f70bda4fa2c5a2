//! Resume Kit shared types, errors, and validation helpers.
//!
//! This crate provides foundational types shared across the rk-* crates:
//! - Artifact and artifact-set types for analysis results
//! - Upload file metadata and validation gates
//! - Export format specifications (MIME types, extensions)
//! - The `PdfEngine` seam between packaging and rendering
//! - Common error types

pub mod artifact;
pub mod error;
pub mod format;
pub mod validate;

pub use artifact::{guess_mime_type, Artifact, ArtifactKind, ArtifactSet, FileDescriptor};
pub use error::{format_error_human, Error, ErrorCategory, Result};
pub use format::ExportFormat;
pub use validate::{
    format_file_size, validate_file_size, validate_file_type, validate_upload,
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_FILE_BYTES,
};

/// Seam between the bundle packager and the PDF rendering pipeline.
///
/// The packager treats PDF generation as best-effort per artifact, so it
/// only needs "title + body in, bytes or error out". Tests substitute a
/// failing engine to exercise the skip path.
pub trait PdfEngine {
    /// Render a title + Markdown/plain-text body into PDF bytes.
    fn render_pdf(&self, title: &str, body: &str) -> Result<Vec<u8>>;
}
