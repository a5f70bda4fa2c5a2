//! Report configuration.

use serde::{Deserialize, Serialize};

/// Which parts of the report to emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title; `None` uses the default.
    pub title: Option<String>,
    /// Include the file information section.
    pub file_info: bool,
    /// Include the per-section character statistics.
    pub statistics: bool,
    /// Include the generator footer.
    pub footer: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            file_info: true,
            statistics: true,
            footer: true,
        }
    }
}

impl ReportConfig {
    /// Resolved report title.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Resume Analysis Report")
    }
}
