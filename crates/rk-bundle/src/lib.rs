//! Zip bundle packaging for resume analysis results.
//!
//! A bundle is a single `.zip` archive holding every export representation
//! of an analysis session inside one fixed top-level folder:
//!
//! ```text
//! resume_analysis/
//!   00_analysis_report.md / .txt / .pdf
//!   01_resume_text.md / .txt / .pdf
//!   02_optimization_suggestions.md / .txt / .pdf
//!   03_interview_questions.md / .txt / .pdf
//!   data.json
//! ```
//!
//! `.md` and `.txt` entries are guaranteed for every non-empty artifact;
//! `.pdf` entries are best-effort, since a PDF render failure for one
//! artifact must never sink the rest of the bundle. `data.json` is the
//! machine-readable snapshot of the whole session.

pub mod error;
pub mod packager;
pub mod reader;
pub mod snapshot;

pub use error::{BundleError, Result};
pub use packager::BundlePackager;
pub use reader::BundleReader;
pub use snapshot::{DataSnapshot, FileInfo, SnapshotMetadata, SNAPSHOT_VERSION};

/// Fixed top-level folder inside every bundle.
pub const BUNDLE_FOLDER: &str = "resume_analysis";

/// Snapshot entry name inside the bundle folder.
pub const SNAPSHOT_NAME: &str = "data.json";
