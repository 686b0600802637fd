//! Metric collectors.
//!
//! A collector is a self-contained unit that observes one actor at a time,
//! updating private counters, and later renders its accumulated state into a
//! named report section. Collectors share no state and never mutate the
//! scene; the only interaction between them is the order of their sections
//! in the final report.

mod actors;
mod lights;
mod meshes;
mod particles;

pub use actors::ActorCollector;
pub use lights::LightCollector;
pub use meshes::MeshCollector;
pub use particles::ParticleSystemCollector;

use scene_model::Actor;

use crate::error::Result;
use crate::report::Section;

/// One metrics category: a single-pass observer plus a section renderer.
pub trait MetricCollector {
    /// The fixed, unique name this collector contributes to the report.
    fn section_name(&self) -> &'static str;

    /// Inspects one actor's relevant components and updates internal
    /// counters. Called exactly once per actor during a traversal. A no-op
    /// for actors without relevant components; fails only on scene data that
    /// violates the documented data model.
    fn observe(&mut self, actor: &Actor) -> Result<()>;

    /// Renders the accumulated state into a section. Pure: callable any
    /// number of times without mutating counters.
    fn render_section(&self) -> Section;
}

/// The standard collector set, in the fixed registration order that
/// determines report section order.
pub fn standard_collectors() -> Vec<Box<dyn MetricCollector>> {
    vec![
        Box::new(LightCollector::new()),
        Box::new(MeshCollector::static_meshes()),
        Box::new(MeshCollector::skeletal_meshes()),
        Box::new(ActorCollector::new()),
        Box::new(ParticleSystemCollector::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_has_fixed_order_and_unique_names() {
        let collectors = standard_collectors();
        let names: Vec<_> = collectors.iter().map(|c| c.section_name()).collect();
        assert_eq!(
            names,
            ["Lights", "StaticMeshes", "SkeletalMeshes", "Actors", "Niagara"]
        );
    }
}
