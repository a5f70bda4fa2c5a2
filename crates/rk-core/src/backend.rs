//! Analysis backend seam and the local plain-text backend.
//!
//! The real analysis service (file parsing, optimization, question
//! generation) lives behind an HTTP API that is not part of this repository.
//! [`AnalysisBackend`] is the trait boundary for it; [`PlainTextBackend`] is
//! the local stand-in that can extract text from `.txt` uploads and declines
//! everything else.

use crate::session::{AnalysisSession, GenerateOptions};
use rk_common::{guess_mime_type, Artifact, ArtifactKind, Error, FileDescriptor, Result};
use std::path::Path;
use tracing::info;

/// External analysis operations.
pub trait AnalysisBackend {
    /// Extract resume text from an uploaded file.
    fn parse(&self, path: &Path) -> Result<String>;

    /// Generate optimization suggestions from resume text.
    fn optimize(&self, resume_text: &str) -> Result<String>;

    /// Generate interview questions from resume text.
    fn questions(&self, resume_text: &str) -> Result<String>;
}

/// Local backend: reads `.txt` files verbatim, declines extras.
#[derive(Debug, Default)]
pub struct PlainTextBackend;

impl AnalysisBackend for PlainTextBackend {
    fn parse(&self, path: &Path) -> Result<String> {
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if !is_txt {
            return Err(Error::BackendUnsupported(format!(
                "plain-text backend can only parse .txt files, got {}",
                path.display()
            )));
        }
        Ok(std::fs::read_to_string(path)?)
    }

    fn optimize(&self, _resume_text: &str) -> Result<String> {
        Err(Error::BackendUnsupported(
            "optimization requires the remote analysis service".to_string(),
        ))
    }

    fn questions(&self, _resume_text: &str) -> Result<String> {
        Err(Error::BackendUnsupported(
            "question generation requires the remote analysis service".to_string(),
        ))
    }
}

/// Build a file descriptor for an on-disk upload.
pub fn describe_file(path: &Path) -> Result<FileDescriptor> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidInput(format!("invalid file name: {}", path.display())))?;
    let size = std::fs::metadata(path)?.len();
    Ok(FileDescriptor::new(name, size, guess_mime_type(name)))
}

/// Drive a full analysis session against a backend.
///
/// A parse failure ends the session in `Failed`; a failed extra is skipped.
/// Either way the session is returned for the caller to inspect, so a
/// partially successful run still exports what it has.
pub fn run_analysis(
    backend: &dyn AnalysisBackend,
    path: &Path,
    options: GenerateOptions,
) -> Result<AnalysisSession> {
    let mut session = AnalysisSession::new(options);
    session.upload(describe_file(path)?)?;
    session.begin_parsing()?;

    let text = match backend.parse(path) {
        Ok(text) => text,
        Err(err) => {
            session.parse_failed(err.to_string())?;
            return Ok(session);
        }
    };
    session.text_ready(Artifact::new(ArtifactKind::ResumeText, text))?;

    if options.any() {
        session.begin_extras()?;
        let resume_text = session
            .artifacts()
            .get(ArtifactKind::ResumeText)
            .map(|a| a.body().to_string())
            .unwrap_or_default();

        if options.optimization {
            match backend.optimize(&resume_text) {
                Ok(body) => {
                    session.extra_ready(Artifact::new(ArtifactKind::Optimization, body))?
                }
                Err(err) => session.extra_failed(ArtifactKind::Optimization, err.to_string())?,
            }
        }
        if options.questions {
            match backend.questions(&resume_text) {
                Ok(body) => session.extra_ready(Artifact::new(ArtifactKind::Questions, body))?,
                Err(err) => session.extra_failed(ArtifactKind::Questions, err.to_string())?,
            }
        }
    }

    session.finish()?;
    info!(state = %session.state(), "Analysis run complete");
    Ok(session)
}
