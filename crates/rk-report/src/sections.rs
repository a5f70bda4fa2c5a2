//! Individual report section writers.

use chrono::{DateTime, Utc};
use rk_common::{Artifact, ArtifactKind, ArtifactSet, FileDescriptor};

pub(crate) const EMPTY_PLACEHOLDER: &str = "(no content)";

pub(crate) fn write_file_info(out: &mut String, file: &FileDescriptor) {
    out.push_str("## File Information\n\n");
    out.push_str(&format!("* **Name:** {}\n", file.name));
    out.push_str(&format!(
        "* **Size:** {}\n",
        rk_common::format_file_size(file.size_bytes)
    ));
    out.push_str(&format!("* **Type:** {}\n", file.mime_type));
    out.push_str(&format!(
        "* **Analyzed:** {}\n",
        file.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push('\n');
}

pub(crate) fn write_artifact(out: &mut String, kind: ArtifactKind, artifact: Option<&Artifact>) {
    out.push_str(&format!("## {}\n\n", kind.title()));
    match artifact {
        Some(a) if !a.is_empty() => {
            out.push_str(a.body().trim_end());
            out.push('\n');
        }
        _ => out.push_str(EMPTY_PLACEHOLDER),
    }
    out.push('\n');
}

pub(crate) fn write_statistics(out: &mut String, set: &ArtifactSet) {
    out.push_str("## Statistics\n\n");
    for kind in [
        ArtifactKind::ResumeText,
        ArtifactKind::Optimization,
        ArtifactKind::Questions,
    ] {
        let count = set.get(kind).map_or(0, Artifact::char_count);
        out.push_str(&format!("* {}: {} characters\n", kind.title(), count));
    }
    out.push('\n');
}

pub(crate) fn write_footer(out: &mut String, generated_at: DateTime<Utc>) {
    out.push_str("---\n\n");
    out.push_str(&format!(
        "Generated by resume-kit v{} at {}\n",
        env!("CARGO_PKG_VERSION"),
        generated_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    ));
}
