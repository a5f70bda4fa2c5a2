//! Single-file exports: one artifact, one output file.
//!
//! Markdown and text exports write the artifact body verbatim, byte for
//! byte. PDF goes through the render engine and, unlike the bundle path,
//! a render failure here aborts the export: a single-file export with no
//! file is not a success.

use rk_common::{Artifact, Error, ExportFormat, PdfEngine, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output path for an artifact in a given format.
pub fn export_path(dir: &Path, artifact: &Artifact, format: ExportFormat) -> PathBuf {
    dir.join(format!(
        "{}{}",
        artifact.kind().file_stem(),
        format.extension()
    ))
}

/// Write one artifact to disk in the requested format.
///
/// Returns the written path. `Zip` is not a per-artifact format; use the
/// bundle packager for it.
pub fn export_artifact(
    artifact: &Artifact,
    format: ExportFormat,
    engine: Option<&dyn PdfEngine>,
    dir: &Path,
) -> Result<PathBuf> {
    let path = export_path(dir, artifact, format);

    match format {
        ExportFormat::Markdown | ExportFormat::Text => {
            std::fs::write(&path, artifact.body())?;
        }
        ExportFormat::Pdf => {
            let engine = engine.ok_or_else(|| {
                Error::Render("no PDF engine available for this export".to_string())
            })?;
            let bytes = engine.render_pdf(artifact.title(), artifact.body())?;
            std::fs::write(&path, bytes)?;
        }
        ExportFormat::Zip => {
            return Err(Error::InvalidInput(
                "zip is a bundle format; use the bundle command".to_string(),
            ));
        }
    }

    info!(path = %path.display(), format = %format.extension(), "Artifact exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rk_common::ArtifactKind;
    use tempfile::TempDir;

    struct StubEngine;

    impl PdfEngine for StubEngine {
        fn render_pdf(&self, _title: &str, _body: &str) -> Result<Vec<u8>> {
            Ok(b"%PDF-1.4 stub".to_vec())
        }
    }

    struct FailingEngine;

    impl PdfEngine for FailingEngine {
        fn render_pdf(&self, _title: &str, _body: &str) -> Result<Vec<u8>> {
            Err(Error::Render("rasterizer exploded".to_string()))
        }
    }

    fn artifact() -> Artifact {
        Artifact::new(ArtifactKind::ResumeText, "body **with** markdown")
    }

    #[test]
    fn test_markdown_and_text_are_verbatim() {
        let dir = TempDir::new().unwrap();

        for format in [ExportFormat::Markdown, ExportFormat::Text] {
            let path = export_artifact(&artifact(), format, None, dir.path()).unwrap();
            let written = std::fs::read(&path).unwrap();
            assert_eq!(written, b"body **with** markdown");
        }
    }

    #[test]
    fn test_export_paths() {
        let dir = TempDir::new().unwrap();
        let path = export_artifact(&artifact(), ExportFormat::Markdown, None, dir.path()).unwrap();
        assert!(path.ends_with("01_resume_text.md"));
    }

    #[test]
    fn test_pdf_uses_engine() {
        let dir = TempDir::new().unwrap();
        let path =
            export_artifact(&artifact(), ExportFormat::Pdf, Some(&StubEngine), dir.path())
                .unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 stub");
    }

    #[test]
    fn test_pdf_failure_aborts_single_export() {
        let dir = TempDir::new().unwrap();
        let result =
            export_artifact(&artifact(), ExportFormat::Pdf, Some(&FailingEngine), dir.path());
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(!export_path(dir.path(), &artifact(), ExportFormat::Pdf).exists());
    }

    #[test]
    fn test_zip_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            export_artifact(&artifact(), ExportFormat::Zip, None, dir.path()),
            Err(Error::InvalidInput(_))
        ));
    }
}
