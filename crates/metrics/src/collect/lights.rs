//! Light counts by mobility.

use scene_model::{Actor, Mobility};

use crate::accum::CountMap;
use crate::collect::MetricCollector;
use crate::error::{MetricsError, Result};
use crate::report::Section;

/// Classifies every light component into exactly one mobility bucket.
///
/// Alongside the scalar totals, the collector accumulates a per-actor light
/// count for each mobility. Those maps are diagnostic only, identifying
/// actors carrying many lights, and are not rendered into the section.
#[derive(Debug, Default)]
pub struct LightCollector {
    static_count: u64,
    stationary_count: u64,
    movable_count: u64,
    static_by_actor: CountMap<String>,
    stationary_by_actor: CountMap<String>,
    movable_by_actor: CountMap<String>,
}

impl LightCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-actor light counts for one mobility bucket (diagnostic).
    pub fn per_actor(&self, mobility: Mobility) -> &CountMap<String> {
        match mobility {
            Mobility::Static => &self.static_by_actor,
            Mobility::Stationary => &self.stationary_by_actor,
            Mobility::Movable => &self.movable_by_actor,
        }
    }
}

impl MetricCollector for LightCollector {
    fn section_name(&self) -> &'static str {
        "Lights"
    }

    fn observe(&mut self, actor: &Actor) -> Result<()> {
        for light in actor.lights() {
            let mobility =
                light
                    .mobility
                    .decode()
                    .ok_or_else(|| MetricsError::UnknownMobility {
                        actor: actor.name().to_string(),
                        code: light.mobility.0,
                    })?;

            let by_actor = match mobility {
                Mobility::Static => {
                    self.static_count += 1;
                    &mut self.static_by_actor
                }
                Mobility::Stationary => {
                    self.stationary_count += 1;
                    &mut self.stationary_by_actor
                }
                Mobility::Movable => {
                    self.movable_count += 1;
                    &mut self.movable_by_actor
                }
            };

            by_actor.bump(actor.name().to_string());
        }

        Ok(())
    }

    fn render_section(&self) -> Section {
        Section::new()
            .count("StaticLightCount", self.static_count)
            .count("StationaryLightCount", self.stationary_count)
            .count("MoveableLightCount", self.movable_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_model::{Component, LightComponent};

    fn light_actor(name: &str, mobilities: &[Mobility]) -> Actor {
        let mut actor = Actor::new(name, "LightActor");
        for &mobility in mobilities {
            actor = actor.with_component(Component::Light(LightComponent::new(mobility)));
        }
        actor
    }

    #[test]
    fn each_light_lands_in_exactly_one_bucket() {
        let mut collector = LightCollector::new();
        collector
            .observe(&light_actor(
                "Torch",
                &[Mobility::Static, Mobility::Movable, Mobility::Static],
            ))
            .unwrap();
        collector
            .observe(&light_actor("Lamp", &[Mobility::Stationary]))
            .unwrap();

        let section = collector.render_section();
        assert_eq!(section.scalar("StaticLightCount"), Some(2));
        assert_eq!(section.scalar("StationaryLightCount"), Some(1));
        assert_eq!(section.scalar("MoveableLightCount"), Some(1));
    }

    #[test]
    fn per_actor_breakdown_is_accumulated_but_not_rendered() {
        let mut collector = LightCollector::new();
        collector
            .observe(&light_actor(
                "Chandelier",
                &[Mobility::Static, Mobility::Static],
            ))
            .unwrap();

        assert_eq!(
            collector
                .per_actor(Mobility::Static)
                .get(&"Chandelier".to_string()),
            2
        );

        let section = collector.render_section();
        assert_eq!(section.fields().len(), 3);
    }

    #[test]
    fn actors_without_lights_are_a_no_op() {
        let mut collector = LightCollector::new();
        collector
            .observe(&Actor::new("Crate", "StaticMeshActor"))
            .unwrap();

        let section = collector.render_section();
        assert_eq!(section.scalar("StaticLightCount"), Some(0));
        assert_eq!(section.scalar("StationaryLightCount"), Some(0));
        assert_eq!(section.scalar("MoveableLightCount"), Some(0));
    }

    #[test]
    fn unknown_mobility_is_an_invariant_violation() {
        let actor = Actor::new("Broken", "LightActor")
            .with_component(Component::Light(LightComponent::from_raw(9)));

        let mut collector = LightCollector::new();
        let err = collector.observe(&actor).unwrap_err();
        assert_eq!(
            err,
            MetricsError::UnknownMobility {
                actor: "Broken".to_string(),
                code: 9
            }
        );
        assert!(err.is_invariant_violation());
    }
}
