//! Actor totals and class distribution.

use scene_model::Actor;

use crate::accum::CountMap;
use crate::collect::MetricCollector;
use crate::error::Result;
use crate::report::Section;

/// Counts every actor, regardless of components, and groups by class name.
#[derive(Debug, Default)]
pub struct ActorCollector {
    total: u64,
    by_class: CountMap<String>,
}

impl ActorCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricCollector for ActorCollector {
    fn section_name(&self) -> &'static str {
        "Actors"
    }

    fn observe(&mut self, actor: &Actor) -> Result<()> {
        self.total += 1;
        self.by_class.bump(actor.class().name().to_string());
        Ok(())
    }

    fn render_section(&self) -> Section {
        Section::new().count("ActorCount", self.total).breakdown(
            "ByClass",
            self.by_class.to_labeled(|class| class.clone()),
        )
    }
}
