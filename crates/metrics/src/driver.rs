//! Single-pass aggregation driver.
//!
//! The driver owns one fresh set of collectors for one level, walks the actor
//! sequence forward exactly once dispatching each actor to every collector in
//! registration order, then renders every section into the merged report.
//! It consumes itself on [`AggregationDriver::run`]: collector state is never
//! shared or reused across levels.

use scene_model::Actor;

use crate::collect::{MetricCollector, standard_collectors};
use crate::error::Result;
use crate::report::Report;

/// Drives one traversal + one render over a supplied actor sequence.
pub struct AggregationDriver {
    collectors: Vec<Box<dyn MetricCollector>>,
}

impl AggregationDriver {
    /// A driver with the standard five collectors.
    pub fn standard() -> Self {
        Self::with_collectors(standard_collectors())
    }

    /// A driver with a caller-chosen collector set. Registration order
    /// determines section order in the report; it does not affect values.
    pub fn with_collectors(collectors: Vec<Box<dyn MetricCollector>>) -> Self {
        Self { collectors }
    }

    /// Traverses the sequence once and assembles the report.
    ///
    /// Any invariant violation inside a collector aborts the traversal: no
    /// partial report is produced for this level.
    pub fn run(mut self, actors: &[Actor]) -> Result<Report> {
        tracing::debug!(actor_count = actors.len(), "starting aggregation pass");

        for actor in actors {
            for collector in &mut self.collectors {
                collector.observe(actor)?;
            }
        }

        let mut report = Report::new();
        for collector in &self.collectors {
            tracing::debug!(section = collector.section_name(), "rendering section");
            report.push_section(collector.section_name(), collector.render_section());
        }

        Ok(report)
    }
}

/// Aggregates one level with the standard collector set.
pub fn aggregate(actors: &[Actor]) -> Result<Report> {
    AggregationDriver::standard().run(actors)
}
