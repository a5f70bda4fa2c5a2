//! Markdown summary report for a completed analysis.
//!
//! The report is the `00_analysis_report` artifact of an export bundle and
//! the payload of the `report` command: file information, every analysis
//! section (with a placeholder when a section produced nothing), content
//! statistics, and a generator footer.
//!
//! Output is deterministic for a given input set and timestamp, so bundles
//! built from the same session compare byte-for-byte.

pub mod config;
pub mod generator;
mod sections;

pub use config::ReportConfig;
pub use generator::ReportGenerator;

use chrono::{DateTime, Utc};
use rk_common::{ArtifactSet, FileDescriptor};

/// Generate a summary report with default configuration.
pub fn generate_report(
    set: &ArtifactSet,
    file: &FileDescriptor,
    generated_at: DateTime<Utc>,
) -> String {
    ReportGenerator::default_config().generate(set, file, generated_at)
}
