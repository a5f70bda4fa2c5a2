//! No-mock bundle integration tests.
//!
//! Exercises real bundle creation and read-back:
//! - Entry layout under the fixed top-level folder
//! - Guaranteed `.md`/`.txt` entries and best-effort `.pdf` entries
//! - Per-artifact PDF failure isolation
//! - `data.json` snapshot schema
//! - Deterministic output for a pinned timestamp
//! - Filename derivation

use chrono::{TimeZone, Utc};
use rk_bundle::{BundlePackager, BundleReader, BUNDLE_FOLDER, SNAPSHOT_VERSION};
use rk_common::{Artifact, ArtifactKind, ArtifactSet, FileDescriptor, PdfEngine};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

/// Stub engine producing a recognizable PDF payload for every artifact.
struct StubEngine;

impl PdfEngine for StubEngine {
    fn render_pdf(&self, _title: &str, _body: &str) -> rk_common::Result<Vec<u8>> {
        Ok(b"%PDF-1.4 stub".to_vec())
    }
}

/// Engine that fails for one artifact title and succeeds for the rest.
struct SelectiveFailEngine {
    fail_title: &'static str,
}

impl PdfEngine for SelectiveFailEngine {
    fn render_pdf(&self, title: &str, _body: &str) -> rk_common::Result<Vec<u8>> {
        if title == self.fail_title {
            Err(rk_common::Error::Render("canvas unavailable".to_string()))
        } else {
            Ok(b"%PDF-1.4 stub".to_vec())
        }
    }
}

fn full_set() -> ArtifactSet {
    let mut set = ArtifactSet::default();
    set.insert(Artifact::new(
        ArtifactKind::ResumeText,
        "Jane Doe\nSoftware Engineer\n10 years of systems work",
    ))
    .unwrap();
    set.insert(Artifact::new(
        ArtifactKind::Optimization,
        "* Quantify achievements\n* Trim the objective section",
    ))
    .unwrap();
    set.insert(Artifact::new(
        ArtifactKind::Questions,
        "1. Describe a hard bug you fixed.",
    ))
    .unwrap();
    set
}

fn source_file() -> FileDescriptor {
    FileDescriptor {
        name: "jane_doe_resume.pdf".to_string(),
        size_bytes: 48_130,
        mime_type: "application/pdf".to_string(),
        analyzed_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
    }
}

fn pinned_packager<'a>() -> BundlePackager<'a> {
    BundlePackager::new().with_generated_at(Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap())
}

fn entry(name: &str) -> String {
    format!("{BUNDLE_FOLDER}/{name}")
}

// ============================================================================
// Entry layout
// ============================================================================

#[test]
fn test_bundle_contains_all_expected_entries() {
    let engine = StubEngine;
    let bytes = pinned_packager()
        .with_engine(&engine)
        .write_to_vec(&full_set(), &source_file())
        .unwrap();

    assert_eq!(&bytes[0..2], b"PK");

    let reader = BundleReader::from_bytes(bytes).unwrap();
    for stem in [
        "00_analysis_report",
        "01_resume_text",
        "02_optimization_suggestions",
        "03_interview_questions",
    ] {
        for ext in ["md", "txt", "pdf"] {
            assert!(
                reader.has_file(&entry(&format!("{stem}.{ext}"))),
                "missing {stem}.{ext}"
            );
        }
    }
    assert!(reader.has_file(&entry("data.json")));
}

#[test]
fn test_empty_artifact_is_omitted() {
    let mut set = full_set();
    set.insert(Artifact::new(ArtifactKind::Questions, "   \n"))
        .unwrap();

    let bytes = pinned_packager()
        .write_to_vec(&set, &source_file())
        .unwrap();
    let reader = BundleReader::from_bytes(bytes).unwrap();

    assert!(!reader.has_file(&entry("03_interview_questions.md")));
    assert!(!reader.has_file(&entry("03_interview_questions.txt")));
    // The summary still lists the section with a placeholder.
    assert!(reader.has_file(&entry("00_analysis_report.md")));
}

#[test]
fn test_text_entry_is_verbatim_and_md_gets_header() {
    let bytes = pinned_packager()
        .write_to_vec(&full_set(), &source_file())
        .unwrap();
    let mut reader = BundleReader::from_bytes(bytes).unwrap();

    let txt = reader.read(&entry("01_resume_text.txt")).unwrap();
    assert_eq!(
        txt,
        b"Jane Doe\nSoftware Engineer\n10 years of systems work"
    );

    let md = String::from_utf8(reader.read(&entry("01_resume_text.md")).unwrap()).unwrap();
    assert!(md.starts_with("# Resume Text\n\n"));
    assert!(md.ends_with("10 years of systems work"));
}

// ============================================================================
// PDF failure isolation
// ============================================================================

#[test]
fn test_pdf_failure_skips_only_that_entry() {
    let engine = SelectiveFailEngine {
        fail_title: "Resume Text",
    };
    let bytes = pinned_packager()
        .with_engine(&engine)
        .write_to_vec(&full_set(), &source_file())
        .unwrap();
    let reader = BundleReader::from_bytes(bytes).unwrap();

    // The failed artifact keeps its md/txt entries, loses only the pdf.
    assert!(reader.has_file(&entry("01_resume_text.md")));
    assert!(reader.has_file(&entry("01_resume_text.txt")));
    assert!(!reader.has_file(&entry("01_resume_text.pdf")));

    // The summary report still lands in all three formats.
    assert!(reader.has_file(&entry("00_analysis_report.md")));
    assert!(reader.has_file(&entry("00_analysis_report.txt")));
    assert!(reader.has_file(&entry("00_analysis_report.pdf")));

    // Other artifacts are untouched.
    assert!(reader.has_file(&entry("02_optimization_suggestions.pdf")));
    assert!(reader.has_file(&entry("03_interview_questions.pdf")));
}

#[test]
fn test_no_engine_means_no_pdf_entries() {
    let bytes = pinned_packager()
        .write_to_vec(&full_set(), &source_file())
        .unwrap();
    let reader = BundleReader::from_bytes(bytes).unwrap();

    assert!(reader.file_names().iter().all(|n| !n.ends_with(".pdf")));
    assert!(reader.has_file(&entry("00_analysis_report.md")));
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn test_snapshot_round_trips_through_archive() {
    let bytes = pinned_packager()
        .write_to_vec(&full_set(), &source_file())
        .unwrap();
    let mut reader = BundleReader::from_bytes(bytes).unwrap();

    let snapshot = reader.read_snapshot().unwrap();
    assert_eq!(snapshot.file_info.name, "jane_doe_resume.pdf");
    assert_eq!(snapshot.file_info.size, 48_130);
    assert_eq!(snapshot.file_info.mime_type, "application/pdf");
    assert!(snapshot.resume_text.starts_with("Jane Doe"));
    assert_eq!(snapshot.metadata.version, SNAPSHOT_VERSION);
    assert!(snapshot.metadata.generated_at.starts_with("2026-03-14T09:30:00"));
}

// ============================================================================
// Determinism and filenames
// ============================================================================

#[test]
fn test_pinned_timestamp_is_byte_deterministic() {
    let a = pinned_packager()
        .write_to_vec(&full_set(), &source_file())
        .unwrap();
    let b = pinned_packager()
        .write_to_vec(&full_set(), &source_file())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_bundle_file_name_pattern() {
    let name = pinned_packager().file_name(&source_file());
    assert_eq!(name, "resume_analysis_jane_doe_resume_2026-03-14.zip");
}

#[test]
fn test_write_to_disk() {
    let temp = TempDir::new().unwrap();
    let packager = pinned_packager();
    let path = temp.path().join(packager.file_name(&source_file()));

    let bytes = packager.write(&full_set(), &source_file(), &path).unwrap();

    assert!(path.exists());
    assert_eq!(bytes, std::fs::metadata(&path).unwrap().len());

    let mut reader = BundleReader::open(&path).unwrap();
    assert!(reader.read_snapshot().is_ok());
}
