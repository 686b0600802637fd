//! JSON persistence and console rendering.

use std::fs;
use std::path::{Path, PathBuf};

use metrics_core::Report;

use crate::error::Result;

/// Default output directory name, relative to wherever the host points the
/// writer.
pub const DEFAULT_OUTPUT_DIR: &str = "MapMetrics";

/// Persists finished reports as pretty JSON files named after their level.
#[derive(Clone, Debug)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// A writer targeting the given output directory. The directory is
    /// created on first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `report` to `<output_dir>/<stem>.json`, where the stem is the
    /// base filename of `level_name`.
    ///
    /// Returns the path of the written file.
    pub fn write(&self, level_name: &str, report: &Report) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{}.json", level_stem(level_name)));

        fs::create_dir_all(&self.output_dir)?;
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&path, json)?;

        tracing::info!(level = level_name, path = %path.display(), "wrote report");

        Ok(path)
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

/// Renders a report as pretty JSON for operator-visible logging.
pub fn render_pretty(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Base filename of a level identifier: the last path segment with any
/// extension stripped. Level names arrive as package-style paths such as
/// `/Game/Maps/Arena` or on-disk paths such as `Maps/Arena.umap`.
pub fn level_stem(level_name: &str) -> &str {
    let base = level_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(level_name);
    match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    }
}
