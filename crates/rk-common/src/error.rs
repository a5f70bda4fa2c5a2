//! Error types for Resume Kit.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! Errors can be formatted for human consumption with headline, reason, and fix:
//! ```text
//! ✗ Unsupported File Type
//!   Reason: unsupported file type: resume.exe
//!   Fix: Upload a PDF, Word, or TXT file.
//! ```

use thiserror::Error;

/// Result type alias for Resume Kit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
///
/// These map the export pipeline's failure taxonomy: validation errors stop
/// an operation before it starts, render errors are skippable per artifact,
/// packaging errors are fatal to the whole export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Upload gating errors (file type, file size).
    Validation,
    /// PDF layout/rasterization errors.
    Render,
    /// Archive assembly and serialization errors.
    Packaging,
    /// Analysis session and state machine errors.
    Session,
    /// External analysis backend errors.
    Backend,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Render => write!(f, "render"),
            ErrorCategory::Packaging => write!(f, "packaging"),
            ErrorCategory::Session => write!(f, "session"),
            ErrorCategory::Backend => write!(f, "backend"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Resume Kit.
#[derive(Error, Debug)]
pub enum Error {
    // Validation errors (10-19)
    #[error("unsupported file type: {name}")]
    UnsupportedFileType { name: String },

    #[error("file too large: {bytes} bytes (limit {max})")]
    FileTooLarge { bytes: u64, max: u64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Render errors (20-29)
    #[error("PDF generation failed: {0}")]
    Render(String),

    #[error("no usable font available: {0}")]
    FontUnavailable(String),

    // Packaging errors (30-39)
    #[error("bundle packaging failed: {0}")]
    Packaging(String),

    // Session errors (40-49)
    #[error("invalid session transition: {from} cannot accept {event}")]
    InvalidTransition { from: String, event: String },

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),

    // Backend errors (50-59)
    #[error("analysis backend error: {0}")]
    Backend(String),

    #[error("operation not supported by this backend: {0}")]
    BackendUnsupported(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    ///
    /// Error codes are grouped by category:
    /// - 10-19: Validation errors
    /// - 20-29: Render errors
    /// - 30-39: Packaging errors
    /// - 40-49: Session errors
    /// - 50-59: Backend errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::UnsupportedFileType { .. } => 10,
            Error::FileTooLarge { .. } => 11,
            Error::InvalidInput(_) => 12,
            Error::Render(_) => 20,
            Error::FontUnavailable(_) => 21,
            Error::Packaging(_) => 30,
            Error::InvalidTransition { .. } => 40,
            Error::AnalysisFailed(_) => 41,
            Error::Backend(_) => 50,
            Error::BackendUnsupported(_) => 51,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnsupportedFileType { .. }
            | Error::FileTooLarge { .. }
            | Error::InvalidInput(_) => ErrorCategory::Validation,

            Error::Render(_) | Error::FontUnavailable(_) => ErrorCategory::Render,

            Error::Packaging(_) => ErrorCategory::Packaging,

            Error::InvalidTransition { .. } | Error::AnalysisFailed(_) => ErrorCategory::Session,

            Error::Backend(_) | Error::BackendUnsupported(_) => ErrorCategory::Backend,

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether a bundle export may continue past this error.
    ///
    /// Render errors are skippable per artifact; everything else aborts the
    /// operation that raised it.
    pub fn is_skippable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Render)
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::UnsupportedFileType { .. } => "Unsupported File Type",
            Error::FileTooLarge { .. } => "File Too Large",
            Error::InvalidInput(_) => "Invalid Input",
            Error::Render(_) => "PDF Generation Failed",
            Error::FontUnavailable(_) => "No Usable Font",
            Error::Packaging(_) => "Bundle Packaging Failed",
            Error::InvalidTransition { .. } => "Invalid Session Transition",
            Error::AnalysisFailed(_) => "Analysis Failed",
            Error::Backend(_) => "Backend Error",
            Error::BackendUnsupported(_) => "Backend Operation Unsupported",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::UnsupportedFileType { .. } => {
                "Upload a PDF, Word, or TXT file. Run 'rk check <file>' to validate."
            }
            Error::FileTooLarge { .. } => {
                "Reduce the file below the 10 MiB limit or raise it with '--max-size'."
            }
            Error::InvalidInput(_) => "Check the command arguments and input files.",
            Error::Render(_) => {
                "Retry the export. If persistent, export Markdown or text instead."
            }
            Error::FontUnavailable(_) => {
                "Install a system sans-serif font (and a CJK font for non-Latin text)."
            }
            Error::Packaging(_) => {
                "Check disk space and output directory permissions, then retry the export."
            }
            Error::InvalidTransition { .. } => {
                "The wizard steps ran out of order. Restart the session with fresh inputs."
            }
            Error::AnalysisFailed(_) => "Retry the analysis with the same file.",
            Error::Backend(_) => "Check that the analysis backend is reachable and retry.",
            Error::BackendUnsupported(_) => {
                "This backend only extracts text from .txt files; use the full analysis service."
            }
            Error::Io(_) => "Check paths, permissions, and disk space, then retry.",
            Error::Json(_) => "Invalid JSON was produced or consumed; report this as a bug.",
        }
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
