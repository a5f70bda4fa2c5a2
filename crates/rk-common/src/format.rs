//! Export format specifications.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported export formats for analysis artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raw UTF-8 Markdown, content written verbatim.
    #[default]
    Markdown,

    /// Raw UTF-8 plain text, content written verbatim.
    Text,

    /// Multi-page rasterized PDF.
    Pdf,

    /// Compressed bundle of every representation plus a JSON snapshot.
    Zip,
}

impl ExportFormat {
    /// MIME type for the produced file.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown;charset=utf-8",
            ExportFormat::Text => "text/plain;charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Zip => "application/zip",
        }
    }

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => ".md",
            ExportFormat::Text => ".txt",
            ExportFormat::Pdf => ".pdf",
            ExportFormat::Zip => ".zip",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Zip => write!(f, "zip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Markdown.mime_type(), "text/markdown;charset=utf-8");
        assert_eq!(ExportFormat::Text.mime_type(), "text/plain;charset=utf-8");
        assert_eq!(ExportFormat::Zip.mime_type(), "application/zip");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Markdown.extension(), ".md");
        assert_eq!(ExportFormat::Pdf.extension(), ".pdf");
    }
}
