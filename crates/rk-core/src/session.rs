//! Analysis session state machine.
//!
//! The upload-to-export flow is an explicit finite-state machine instead of
//! step indices:
//!
//! ```text
//! Idle -> Uploaded -> Parsing -> TextReady -> GeneratingExtras -> Done
//!                        |                          |
//!                        v                          v (per-artifact skip)
//!                      Failed                     Done
//! ```
//!
//! Extras (optimization suggestions, interview questions) are optional and
//! gated on [`GenerateOptions`]. A failed extra is recorded and skipped; only
//! a resume-text parse failure sinks the session. Restarting from any state
//! discards all artifacts.

use rk_common::{Artifact, ArtifactKind, ArtifactSet, Error, FileDescriptor, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Wizard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No file yet.
    Idle,
    /// File accepted, analysis not started.
    Uploaded,
    /// Resume text extraction in flight.
    Parsing,
    /// Resume text available; extras not started.
    TextReady,
    /// Optional artifacts being generated.
    GeneratingExtras,
    /// All requested work finished.
    Done,
    /// Resume text extraction failed; only restart leaves this state.
    Failed,
}

impl SessionState {
    /// Whether the session reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Done | SessionState::Failed)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionState::Idle => "idle",
            SessionState::Uploaded => "uploaded",
            SessionState::Parsing => "parsing",
            SessionState::TextReady => "text_ready",
            SessionState::GeneratingExtras => "generating_extras",
            SessionState::Done => "done",
            SessionState::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Which optional artifacts the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub optimization: bool,
    pub questions: bool,
}

impl GenerateOptions {
    /// All extras enabled.
    pub fn all() -> Self {
        Self {
            optimization: true,
            questions: true,
        }
    }

    /// Whether any extra was requested.
    pub fn any(self) -> bool {
        self.optimization || self.questions
    }

    /// Whether a given artifact kind was requested.
    pub fn wants(self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Optimization => self.optimization,
            ArtifactKind::Questions => self.questions,
            ArtifactKind::ResumeText => true,
            ArtifactKind::Summary => false,
        }
    }
}

/// One analysis session from upload to export.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    state: SessionState,
    options: GenerateOptions,
    file: Option<FileDescriptor>,
    artifacts: ArtifactSet,
    skipped: Vec<(ArtifactKind, String)>,
    failure: Option<String>,
}

impl AnalysisSession {
    /// Create a fresh session.
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            state: SessionState::Idle,
            options,
            file: None,
            artifacts: ArtifactSet::default(),
            skipped: Vec::new(),
            failure: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn options(&self) -> GenerateOptions {
        self.options
    }

    pub fn file(&self) -> Option<&FileDescriptor> {
        self.file.as_ref()
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    /// Extras that failed and were skipped, with their error messages.
    pub fn skipped(&self) -> &[(ArtifactKind, String)] {
        &self.skipped
    }

    /// Fatal failure message, present only in `Failed`.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Accept an uploaded file: `Idle -> Uploaded`.
    ///
    /// The file is validated first; a validation error leaves the session in
    /// `Idle` so the user can pick another file.
    pub fn upload(&mut self, file: FileDescriptor) -> Result<()> {
        self.expect_state(SessionState::Idle, "upload")?;
        rk_common::validate_upload(
            &file.name,
            file.size_bytes,
            rk_common::DEFAULT_ALLOWED_EXTENSIONS,
            rk_common::DEFAULT_MAX_FILE_BYTES,
        )?;

        info!(file = %file.name, bytes = file.size_bytes, "File accepted");
        self.file = Some(file);
        self.state = SessionState::Uploaded;
        Ok(())
    }

    /// Start resume text extraction: `Uploaded -> Parsing`.
    pub fn begin_parsing(&mut self) -> Result<()> {
        self.expect_state(SessionState::Uploaded, "begin_parsing")?;
        self.state = SessionState::Parsing;
        Ok(())
    }

    /// Record extracted resume text: `Parsing -> TextReady`.
    pub fn text_ready(&mut self, artifact: Artifact) -> Result<()> {
        self.expect_state(SessionState::Parsing, "text_ready")?;
        if artifact.kind() != ArtifactKind::ResumeText {
            return Err(Error::InvalidInput(format!(
                "expected resume text artifact, got {}",
                artifact.title()
            )));
        }

        debug!(chars = artifact.char_count(), "Resume text ready");
        self.artifacts.insert(artifact)?;
        self.state = SessionState::TextReady;
        Ok(())
    }

    /// Record a fatal parse failure: `Parsing -> Failed`.
    pub fn parse_failed(&mut self, message: impl Into<String>) -> Result<()> {
        self.expect_state(SessionState::Parsing, "parse_failed")?;
        let message = message.into();
        warn!(%message, "Resume parsing failed");
        self.failure = Some(message);
        self.state = SessionState::Failed;
        Ok(())
    }

    /// Start extra generation: `TextReady -> GeneratingExtras`.
    ///
    /// Rejected when no extras were requested; call [`finish`] directly
    /// instead.
    ///
    /// [`finish`]: AnalysisSession::finish
    pub fn begin_extras(&mut self) -> Result<()> {
        self.expect_state(SessionState::TextReady, "begin_extras")?;
        if !self.options.any() {
            return Err(Error::InvalidTransition {
                from: self.state.to_string(),
                event: "begin_extras (no extras requested)".to_string(),
            });
        }
        self.state = SessionState::GeneratingExtras;
        Ok(())
    }

    /// Record a generated extra; stays in `GeneratingExtras`.
    pub fn extra_ready(&mut self, artifact: Artifact) -> Result<()> {
        self.expect_state(SessionState::GeneratingExtras, "extra_ready")?;
        if !self.options.wants(artifact.kind()) {
            return Err(Error::InvalidInput(format!(
                "artifact was not requested: {}",
                artifact.title()
            )));
        }

        debug!(artifact = artifact.title(), "Extra ready");
        self.artifacts.insert(artifact)?;
        Ok(())
    }

    /// Record a failed extra; it is skipped, the session continues.
    pub fn extra_failed(&mut self, kind: ArtifactKind, message: impl Into<String>) -> Result<()> {
        self.expect_state(SessionState::GeneratingExtras, "extra_failed")?;
        if !self.options.wants(kind) {
            return Err(Error::InvalidInput(format!(
                "artifact was not requested: {}",
                kind.title()
            )));
        }
        let message = message.into();
        warn!(artifact = kind.title(), %message, "Extra generation failed, skipping");
        self.skipped.push((kind, message));
        Ok(())
    }

    /// Complete the session: `TextReady | GeneratingExtras -> Done`.
    pub fn finish(&mut self) -> Result<()> {
        match self.state {
            SessionState::TextReady | SessionState::GeneratingExtras => {
                info!(
                    artifacts = self.artifacts.non_empty().count(),
                    skipped = self.skipped.len(),
                    "Session complete"
                );
                self.state = SessionState::Done;
                Ok(())
            }
            _ => Err(self.invalid_transition("finish")),
        }
    }

    /// Discard everything and return to `Idle`. Valid from any state.
    pub fn restart(&mut self) {
        info!(from = %self.state, "Session restarted");
        self.state = SessionState::Idle;
        self.file = None;
        self.artifacts = ArtifactSet::default();
        self.skipped.clear();
        self.failure = None;
    }

    fn expect_state(&self, expected: SessionState, event: &str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.invalid_transition(event))
        }
    }

    fn invalid_transition(&self, event: &str) -> Error {
        Error::InvalidTransition {
            from: self.state.to_string(),
            event: event.to_string(),
        }
    }
}
