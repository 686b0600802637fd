//! Particle system (Niagara) characteristics.

use scene_model::Actor;

use crate::accum::CountMap;
use crate::collect::MetricCollector;
use crate::error::Result;
use crate::report::Section;

/// Splits particle system components by asset presence and, for those with an
/// asset, by whether the asset runs any GPU emitters. Asset-backed components
/// additionally contribute to an emitter-count distribution.
#[derive(Debug, Default)]
pub struct ParticleSystemCollector {
    without_asset: u64,
    with_gpu_emitters: u64,
    without_gpu_emitters: u64,
    by_emitter_count: CountMap<u32>,
}

impl ParticleSystemCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricCollector for ParticleSystemCollector {
    fn section_name(&self) -> &'static str {
        "Niagara"
    }

    fn observe(&mut self, actor: &Actor) -> Result<()> {
        for system in actor.particle_systems() {
            match &system.asset {
                Some(asset) => {
                    if asset.has_gpu_emitters {
                        self.with_gpu_emitters += 1;
                    } else {
                        self.without_gpu_emitters += 1;
                    }

                    self.by_emitter_count.bump(asset.emitter_count);
                }
                None => self.without_asset += 1,
            }
        }

        Ok(())
    }

    fn render_section(&self) -> Section {
        Section::new()
            .count("WithoutAssetCount", self.without_asset)
            .count("WithoutGPUEmitterCount", self.without_gpu_emitters)
            .count("WithGPUEmitterCount", self.with_gpu_emitters)
            .breakdown(
                "ByEmitterCount",
                self.by_emitter_count
                    .to_labeled(|count| format!("{count}_Emitters")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MetricValue;
    use scene_model::{Component, ParticleSystemComponent};

    fn effect_actor(name: &str, systems: Vec<ParticleSystemComponent>) -> Actor {
        let mut actor = Actor::new(name, "NiagaraActor");
        for system in systems {
            actor = actor.with_component(Component::ParticleSystem(system));
        }
        actor
    }

    #[test]
    fn asset_presence_split() {
        let mut collector = ParticleSystemCollector::new();
        collector
            .observe(&effect_actor(
                "Sparks",
                vec![
                    ParticleSystemComponent::without_asset(),
                    ParticleSystemComponent::with_asset(true, 3),
                    ParticleSystemComponent::with_asset(false, 1),
                    ParticleSystemComponent::with_asset(true, 3),
                ],
            ))
            .unwrap();

        let section = collector.render_section();
        assert_eq!(section.scalar("WithoutAssetCount"), Some(1));
        assert_eq!(section.scalar("WithGPUEmitterCount"), Some(2));
        assert_eq!(section.scalar("WithoutGPUEmitterCount"), Some(1));
    }

    #[test]
    fn assetless_components_do_not_touch_other_buckets() {
        let mut collector = ParticleSystemCollector::new();
        collector
            .observe(&effect_actor(
                "Empty",
                vec![ParticleSystemComponent::without_asset()],
            ))
            .unwrap();

        let section = collector.render_section();
        assert_eq!(section.scalar("WithoutAssetCount"), Some(1));
        assert_eq!(section.scalar("WithGPUEmitterCount"), Some(0));
        assert_eq!(section.scalar("WithoutGPUEmitterCount"), Some(0));

        let Some(MetricValue::Breakdown(entries)) = section.field("ByEmitterCount") else {
            panic!("ByEmitterCount should be a breakdown");
        };
        assert!(entries.is_empty());
    }

    #[test]
    fn emitter_count_distribution_covers_asset_backed_components() {
        let mut collector = ParticleSystemCollector::new();
        collector
            .observe(&effect_actor(
                "Fire",
                vec![
                    ParticleSystemComponent::with_asset(true, 2),
                    ParticleSystemComponent::with_asset(false, 2),
                    ParticleSystemComponent::with_asset(false, 0),
                    ParticleSystemComponent::without_asset(),
                ],
            ))
            .unwrap();

        let section = collector.render_section();
        let Some(MetricValue::Breakdown(entries)) = section.field("ByEmitterCount") else {
            panic!("ByEmitterCount should be a breakdown");
        };
        assert_eq!(
            entries,
            &vec![("0_Emitters".to_string(), 1), ("2_Emitters".to_string(), 2)]
        );

        // Distribution covers exactly the asset-backed components.
        let distribution_total: u64 = entries.iter().map(|(_, count)| count).sum();
        let gpu = section.scalar("WithGPUEmitterCount").unwrap();
        let non_gpu = section.scalar("WithoutGPUEmitterCount").unwrap();
        assert_eq!(distribution_total, gpu + non_gpu);
    }
}
