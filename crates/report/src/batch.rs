//! Per-level and batch processing flow.
//!
//! Error isolation rules:
//! - an invariant violation during aggregation aborts that level with no
//!   partial report,
//! - a sink failure after a successful aggregation is a partial success: the
//!   report is valid, only its persistence failed,
//! - no failure in one level affects any other level in a batch.

use metrics_core::{MetricsError, Report, aggregate};
use scene_model::Actor;

use crate::error::SinkError;
use crate::writer::{ReportWriter, render_pretty};

/// How processing one level ended.
#[derive(Debug)]
pub enum LevelOutcome {
    /// Aggregated and persisted.
    Written(std::path::PathBuf),
    /// Aggregated successfully, but the sink failed. The report remains
    /// valid and is carried here.
    Unpersisted { report: Report, error: SinkError },
    /// Aggregation aborted; no report exists for this level.
    Aborted(MetricsError),
}

impl LevelOutcome {
    /// True when a valid report was produced, persisted or not.
    pub fn report_produced(&self) -> bool {
        !matches!(self, Self::Aborted(_))
    }
}

/// Aggregates one level's actors, logs the rendered report, and persists it.
pub fn process_level(level_name: &str, actors: &[Actor], writer: &ReportWriter) -> LevelOutcome {
    tracing::info!(level = level_name, "processing level");

    let report = match aggregate(actors) {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(level = level_name, %error, "aggregation aborted");
            return LevelOutcome::Aborted(error);
        }
    };

    // Render for the operator log before persisting, so a sink failure
    // still leaves the report visible.
    match render_pretty(&report) {
        Ok(rendered) => tracing::info!(level = level_name, report = %rendered, "level report"),
        Err(error) => tracing::warn!(level = level_name, %error, "could not render report"),
    }

    match writer.write(level_name, &report) {
        Ok(path) => LevelOutcome::Written(path),
        Err(error) => {
            tracing::error!(level = level_name, %error, "failed to persist report");
            LevelOutcome::Unpersisted { report, error }
        }
    }
}

/// Processes many levels independently, in order. Returns one outcome per
/// level, keyed by the level name.
pub fn process_batch<'a, I>(levels: I, writer: &ReportWriter) -> Vec<(String, LevelOutcome)>
where
    I: IntoIterator<Item = (&'a str, &'a [Actor])>,
{
    levels
        .into_iter()
        .map(|(name, actors)| (name.to_string(), process_level(name, actors, writer)))
        .collect()
}
