//! The machine-readable `data.json` snapshot.
//!
//! Schema (camelCase, stable across versions):
//!
//! ```json
//! {
//!   "fileInfo": { "name", "size", "type", "analysisTime" },
//!   "resumeText": "...",
//!   "optimizedResume": "...",
//!   "interviewQuestions": "...",
//!   "metadata": { "version", "generatedAt" }
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use rk_common::{ArtifactKind, ArtifactSet, FileDescriptor};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Snapshot format version.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// Source file metadata as recorded in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub analysis_time: String,
}

/// Snapshot format metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub version: String,
    pub generated_at: String,
}

/// Raw session snapshot written to `data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    pub file_info: FileInfo,
    pub resume_text: String,
    pub optimized_resume: String,
    pub interview_questions: String,
    pub metadata: SnapshotMetadata,
}

impl DataSnapshot {
    /// Build a snapshot from an artifact set and file metadata.
    ///
    /// Missing artifacts become empty strings, never missing keys.
    pub fn build(set: &ArtifactSet, file: &FileDescriptor, generated_at: DateTime<Utc>) -> Self {
        let body_of = |kind| {
            set.get(kind)
                .map(|a: &rk_common::Artifact| a.body().to_string())
                .unwrap_or_default()
        };

        Self {
            file_info: FileInfo {
                name: file.name.clone(),
                size: file.size_bytes,
                mime_type: file.mime_type.clone(),
                analysis_time: file
                    .analyzed_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            },
            resume_text: body_of(ArtifactKind::ResumeText),
            optimized_resume: body_of(ArtifactKind::Optimization),
            interview_questions: body_of(ArtifactKind::Questions),
            metadata: SnapshotMetadata {
                version: SNAPSHOT_VERSION.to_string(),
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rk_common::Artifact;

    fn sample() -> DataSnapshot {
        let mut set = ArtifactSet::default();
        set.insert(Artifact::new(ArtifactKind::ResumeText, "text body"))
            .unwrap();
        set.insert(Artifact::new(ArtifactKind::Questions, "Q1?"))
            .unwrap();

        let file = FileDescriptor {
            name: "resume.docx".to_string(),
            size_bytes: 2048,
            mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                .to_string(),
            analyzed_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        };

        DataSnapshot::build(&set, &file, Utc.with_ymd_and_hms(2026, 1, 2, 3, 5, 0).unwrap())
    }

    #[test]
    fn test_snapshot_keys_are_camel_case() {
        let json = sample().to_json().unwrap();

        assert!(json.contains("\"fileInfo\""));
        assert!(json.contains("\"analysisTime\""));
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"resumeText\""));
        assert!(json.contains("\"optimizedResume\""));
        assert!(json.contains("\"interviewQuestions\""));
        assert!(json.contains("\"generatedAt\""));
        assert!(!json.contains("\"mime_type\""));
    }

    #[test]
    fn test_missing_artifact_is_empty_string() {
        let snapshot = sample();
        assert_eq!(snapshot.optimized_resume, "");
        assert_eq!(snapshot.interview_questions, "Q1?");
    }

    #[test]
    fn test_snapshot_round_trips() {
        let snapshot = sample();
        let parsed = DataSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
        assert_eq!(parsed.metadata.version, SNAPSHOT_VERSION);
    }
}
