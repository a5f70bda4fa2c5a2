//! Report generator implementation.

use crate::config::ReportConfig;
use crate::sections;

use chrono::{DateTime, Utc};
use rk_common::{ArtifactKind, ArtifactSet, FileDescriptor};
use tracing::debug;

/// Summary report generator.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a generator with explicit configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render the Markdown report.
    ///
    /// Deterministic for a given artifact set, file descriptor, and
    /// timestamp.
    pub fn generate(
        &self,
        set: &ArtifactSet,
        file: &FileDescriptor,
        generated_at: DateTime<Utc>,
    ) -> String {
        debug!(file = %file.name, "Generating summary report");

        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.config.title()));

        if self.config.file_info {
            sections::write_file_info(&mut out, file);
        }

        for kind in [
            ArtifactKind::ResumeText,
            ArtifactKind::Optimization,
            ArtifactKind::Questions,
        ] {
            sections::write_artifact(&mut out, kind, set.get(kind));
        }

        if self.config.statistics {
            sections::write_statistics(&mut out, set);
        }

        if self.config.footer {
            sections::write_footer(&mut out, generated_at);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rk_common::Artifact;

    fn sample_file() -> FileDescriptor {
        FileDescriptor {
            name: "resume.pdf".to_string(),
            size_bytes: 1536,
            mime_type: "application/pdf".to_string(),
            analyzed_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    fn sample_set() -> ArtifactSet {
        let mut set = ArtifactSet::default();
        set.insert(Artifact::new(
            ArtifactKind::ResumeText,
            "Jane Doe\nSoftware Engineer",
        ))
        .unwrap();
        set.insert(Artifact::new(
            ArtifactKind::Optimization,
            "* Quantify achievements",
        ))
        .unwrap();
        set
    }

    #[test]
    fn test_report_contains_all_sections() {
        let report = generate_report_at(&sample_set());

        assert!(report.starts_with("# Resume Analysis Report\n"));
        assert!(report.contains("## File Information"));
        assert!(report.contains("* **Name:** resume.pdf"));
        assert!(report.contains("* **Size:** 1.5 KB"));
        assert!(report.contains("## Resume Text"));
        assert!(report.contains("Jane Doe"));
        assert!(report.contains("## Optimization Suggestions"));
        assert!(report.contains("## Interview Questions"));
        assert!(report.contains("## Statistics"));
    }

    #[test]
    fn test_missing_section_gets_placeholder() {
        let report = generate_report_at(&sample_set());
        // Questions were never produced.
        let questions = report
            .split("## Interview Questions")
            .nth(1)
            .unwrap();
        assert!(questions.trim_start().starts_with(sections::EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_statistics_count_characters() {
        let report = generate_report_at(&sample_set());
        assert!(report.contains(&format!(
            "* Resume Text: {} characters",
            "Jane Doe\nSoftware Engineer".chars().count()
        )));
        assert!(report.contains("* Interview Questions: 0 characters"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let a = generate_report_at(&sample_set());
        let b = generate_report_at(&sample_set());
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_title_and_disabled_sections() {
        let generator = ReportGenerator::new(ReportConfig {
            title: Some("Session Summary".to_string()),
            file_info: false,
            statistics: false,
            footer: false,
        });
        let report = generator.generate(&sample_set(), &sample_file(), fixed_now());

        assert!(report.starts_with("# Session Summary\n"));
        assert!(!report.contains("## File Information"));
        assert!(!report.contains("## Statistics"));
        assert!(!report.contains("Generated by"));
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn generate_report_at(set: &ArtifactSet) -> String {
        crate::generate_report(set, &sample_file(), fixed_now())
    }
}
