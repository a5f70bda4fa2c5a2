//! Artifact and upload metadata types.
//!
//! An [`Artifact`] is one named textual analysis result. Its body is fixed at
//! construction; every exporter is a pure reader. The [`ArtifactSet`] carries
//! the three upstream results in their fixed presentation order.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of artifact kinds, in presentation order.
///
/// The numeric prefix drives deterministic entry naming inside bundles:
/// the summary report is `00_`, then the upstream artifacts `01_`..`03_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Generated summary report concatenating all artifacts.
    Summary,
    /// Extracted résumé text.
    ResumeText,
    /// Optimization suggestions.
    Optimization,
    /// Interview questions and answers.
    Questions,
}

impl ArtifactKind {
    /// Presentation index, also the bundle entry prefix.
    pub fn index(self) -> u8 {
        match self {
            ArtifactKind::Summary => 0,
            ArtifactKind::ResumeText => 1,
            ArtifactKind::Optimization => 2,
            ArtifactKind::Questions => 3,
        }
    }

    /// Human-facing title, used as Markdown header and PDF title block.
    pub fn title(self) -> &'static str {
        match self {
            ArtifactKind::Summary => "Resume Analysis Report",
            ArtifactKind::ResumeText => "Resume Text",
            ArtifactKind::Optimization => "Optimization Suggestions",
            ArtifactKind::Questions => "Interview Questions",
        }
    }

    /// File stem used for bundle entries, e.g. `01_resume_text`.
    pub fn file_stem(self) -> &'static str {
        match self {
            ArtifactKind::Summary => "00_analysis_report",
            ArtifactKind::ResumeText => "01_resume_text",
            ArtifactKind::Optimization => "02_optimization_suggestions",
            ArtifactKind::Questions => "03_interview_questions",
        }
    }

    /// The upstream artifacts in presentation order (summary excluded).
    pub fn upstream() -> [ArtifactKind; 3] {
        [
            ArtifactKind::ResumeText,
            ArtifactKind::Optimization,
            ArtifactKind::Questions,
        ]
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One named textual analysis result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    kind: ArtifactKind,
    title: String,
    body: String,
}

impl Artifact {
    /// Create an artifact with the kind's default title.
    pub fn new(kind: ArtifactKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            body: body.into(),
        }
    }

    /// Create an artifact with a custom title.
    pub fn with_title(kind: ArtifactKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the body contains any non-whitespace content.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Character count of the body (Unicode scalar values, matching the
    /// figures shown in the summary report's statistics table).
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }
}

/// The upstream analysis results in fixed presentation order.
///
/// Optional slots hold artifacts the user chose not to generate (or whose
/// generation failed and was skipped).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactSet {
    pub resume_text: Option<Artifact>,
    pub optimization: Option<Artifact>,
    pub questions: Option<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an upstream artifact in its slot.
    ///
    /// `Summary` is derived from the set, never stored in it; inserting one
    /// is an [`Error::InvalidInput`].
    pub fn insert(&mut self, artifact: Artifact) -> Result<()> {
        match artifact.kind() {
            ArtifactKind::ResumeText => self.resume_text = Some(artifact),
            ArtifactKind::Optimization => self.optimization = Some(artifact),
            ArtifactKind::Questions => self.questions = Some(artifact),
            ArtifactKind::Summary => {
                return Err(Error::InvalidInput(
                    "summary artifacts are derived, not stored".to_string(),
                ))
            }
        }
        Ok(())
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        match kind {
            ArtifactKind::ResumeText => self.resume_text.as_ref(),
            ArtifactKind::Optimization => self.optimization.as_ref(),
            ArtifactKind::Questions => self.questions.as_ref(),
            ArtifactKind::Summary => None,
        }
    }

    /// Present artifacts in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [
            self.resume_text.as_ref(),
            self.optimization.as_ref(),
            self.questions.as_ref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Present, non-empty artifacts in presentation order. This is the set
    /// the exporters consume.
    pub fn non_empty(&self) -> impl Iterator<Item = &Artifact> {
        self.iter().filter(|a| !a.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }
}

/// Metadata about the uploaded source file. Read-only after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Original file name, including extension.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type as reported at upload, or a best guess from the extension.
    pub mime_type: String,
    /// When the analysis of this file started.
    pub analyzed_at: DateTime<Utc>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            analyzed_at: Utc::now(),
        }
    }

    /// File name without its final extension, used to derive the bundle's
    /// outer filename.
    pub fn base_name(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }
}

/// Guess a MIME type from a file name's extension.
///
/// Covers only the upload allow-list; anything else is reported as
/// `application/octet-stream`.
pub fn guess_mime_type(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".doc") {
        "application/msword"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ordering_and_stems() {
        assert_eq!(ArtifactKind::Summary.index(), 0);
        assert_eq!(ArtifactKind::ResumeText.file_stem(), "01_resume_text");
        assert_eq!(
            ArtifactKind::Questions.file_stem(),
            "03_interview_questions"
        );
        let upstream = ArtifactKind::upstream();
        assert_eq!(upstream[0], ArtifactKind::ResumeText);
        assert_eq!(upstream[2], ArtifactKind::Questions);
    }

    #[test]
    fn test_artifact_accessors() {
        let a = Artifact::new(ArtifactKind::ResumeText, "John Doe\nEngineer");
        assert_eq!(a.title(), "Resume Text");
        assert_eq!(a.body(), "John Doe\nEngineer");
        assert!(!a.is_empty());
        assert_eq!(a.char_count(), 17);
    }

    #[test]
    fn test_whitespace_only_body_is_empty() {
        let a = Artifact::new(ArtifactKind::Optimization, "  \n\t ");
        assert!(a.is_empty());
    }

    #[test]
    fn test_set_presentation_order() {
        let mut set = ArtifactSet::new();
        set.insert(Artifact::new(ArtifactKind::Questions, "Q1")).unwrap();
        set.insert(Artifact::new(ArtifactKind::ResumeText, "text")).unwrap();

        let kinds: Vec<_> = set.non_empty().map(|a| a.kind()).collect();
        assert_eq!(kinds, vec![ArtifactKind::ResumeText, ArtifactKind::Questions]);
    }

    #[test]
    fn test_set_skips_empty_bodies() {
        let mut set = ArtifactSet::new();
        set.insert(Artifact::new(ArtifactKind::ResumeText, "text")).unwrap();
        set.insert(Artifact::new(ArtifactKind::Optimization, "")).unwrap();

        assert_eq!(set.non_empty().count(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_summary_insert_is_rejected() {
        let mut set = ArtifactSet::new();
        let result = set.insert(Artifact::new(ArtifactKind::Summary, "# Report"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(set.is_empty());
    }

    #[test]
    fn test_file_descriptor_base_name() {
        let fd = FileDescriptor::new("resume.final.pdf", 1024, "application/pdf");
        assert_eq!(fd.base_name(), "resume.final");

        let no_ext = FileDescriptor::new("resume", 1024, "application/octet-stream");
        assert_eq!(no_ext.base_name(), "resume");
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type("a.PDF"), "application/pdf");
        assert_eq!(guess_mime_type("a.txt"), "text/plain");
        assert_eq!(guess_mime_type("a.exe"), "application/octet-stream");
    }
}
