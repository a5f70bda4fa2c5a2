//! Bundle packager: artifact set in, one zip archive out.

use crate::snapshot::DataSnapshot;
use crate::{Result, BUNDLE_FOLDER, SNAPSHOT_NAME};
use chrono::{DateTime, Utc};
use rk_common::{Artifact, ArtifactKind, ArtifactSet, FileDescriptor, PdfEngine};
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tracing::{debug, info, warn};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Packages an analysis session into a zip bundle.
///
/// `.md` and `.txt` representations are always written for non-empty
/// artifacts. When a PDF engine is attached, a `.pdf` representation is
/// attempted per artifact; a render failure is logged and that one entry
/// skipped. Only archive serialization itself can fail the packaging.
pub struct BundlePackager<'a> {
    engine: Option<&'a dyn PdfEngine>,
    generated_at: Option<DateTime<Utc>>,
}

impl<'a> BundlePackager<'a> {
    /// Create a packager without PDF support.
    pub fn new() -> Self {
        Self {
            engine: None,
            generated_at: None,
        }
    }

    /// Attach a PDF engine for best-effort `.pdf` entries.
    pub fn with_engine(mut self, engine: &'a dyn PdfEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Pin the generation timestamp (otherwise the current time is used).
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Bundle filename: `resume_analysis_<source-basename>_<ISO-date>.zip`.
    pub fn file_name(&self, file: &FileDescriptor) -> String {
        let date = self.generated_at.unwrap_or_else(Utc::now).date_naive();
        format!("{}_{}_{}.zip", BUNDLE_FOLDER, file.base_name(), date)
    }

    /// Write the bundle to a file; returns the compressed size.
    pub fn write(&self, set: &ArtifactSet, file: &FileDescriptor, path: &Path) -> Result<u64> {
        let out = File::create(path)?;
        let bytes = self.write_to(set, file, out)?;
        info!(path = %path.display(), bytes, "Bundle written");
        Ok(bytes)
    }

    /// Write the bundle to an in-memory byte vector.
    pub fn write_to_vec(&self, set: &ArtifactSet, file: &FileDescriptor) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(set, file, &mut buffer)?;
        Ok(buffer.into_inner())
    }

    fn write_to<W: Write + Seek>(
        &self,
        set: &ArtifactSet,
        file: &FileDescriptor,
        out: W,
    ) -> Result<u64> {
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let mut zip = ZipWriter::new(out);

        // Maximum compression; a fixed mtime keeps the archive deterministic
        // for a pinned timestamp.
        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(9))
            .last_modified_time(zip::DateTime::default())
            .unix_permissions(0o644);

        // Summary report first, in all three representations.
        let report = rk_report::generate_report(set, file, generated_at);
        let summary = Artifact::new(ArtifactKind::Summary, report);
        self.add_artifact(&mut zip, options, &summary)?;

        for artifact in set.non_empty() {
            self.add_artifact(&mut zip, options, artifact)?;
        }

        let snapshot = DataSnapshot::build(set, file, generated_at);
        zip.start_file(entry_path(SNAPSHOT_NAME), options)?;
        zip.write_all(snapshot.to_json()?.as_bytes())?;

        let mut out = zip.finish()?;
        Ok(out.stream_position()?)
    }

    fn add_artifact<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: FileOptions<'_, ()>,
        artifact: &Artifact,
    ) -> Result<()> {
        let stem = artifact.kind().file_stem();

        zip.start_file(entry_path(&format!("{stem}.md")), options)?;
        zip.write_all(markdown_entry(artifact).as_bytes())?;

        zip.start_file(entry_path(&format!("{stem}.txt")), options)?;
        zip.write_all(artifact.body().as_bytes())?;

        if let Some(engine) = self.engine {
            // Per-artifact isolation: a failed render skips this one entry.
            match engine.render_pdf(artifact.title(), artifact.body()) {
                Ok(pdf) => {
                    zip.start_file(entry_path(&format!("{stem}.pdf")), options)?;
                    zip.write_all(&pdf)?;
                }
                Err(err) => {
                    warn!(artifact = artifact.title(), %err, "PDF render failed, skipping entry");
                }
            }
        }

        debug!(artifact = artifact.title(), "Added artifact to bundle");
        Ok(())
    }
}

impl Default for BundlePackager<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_path(name: &str) -> String {
    format!("{BUNDLE_FOLDER}/{name}")
}

/// Markdown representation: title header plus the verbatim body.
fn markdown_entry(artifact: &Artifact) -> String {
    if artifact.kind() == ArtifactKind::Summary {
        // The summary report is already a full Markdown document.
        artifact.body().to_string()
    } else {
        format!("# {}\n\n{}", artifact.title(), artifact.body())
    }
}
