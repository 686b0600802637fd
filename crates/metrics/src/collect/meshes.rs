//! Mesh LOD and material-count distributions.
//!
//! Static and skeletal meshes expose the same two measured properties, so a
//! single collector covers both kinds; two instances with different kinds are
//! registered to produce the two separate sections.

use scene_model::{Actor, MeshComponent};

use crate::accum::CountMap;
use crate::collect::MetricCollector;
use crate::error::Result;
use crate::report::Section;

/// Which mesh component kind an instance observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MeshKind {
    Static,
    Skeletal,
}

/// Buckets meshes by LOD presence and by material count.
///
/// Every mesh contributes to both groupings: its LOD bucket (exactly one LOD
/// variant means "without LODs") and its material-count bucket, zero-material
/// meshes included.
#[derive(Debug)]
pub struct MeshCollector {
    kind: MeshKind,
    with_lods: u64,
    without_lods: u64,
    by_material_count: CountMap<u32>,
}

impl MeshCollector {
    /// A collector over static-mesh components.
    pub fn static_meshes() -> Self {
        Self::new(MeshKind::Static)
    }

    /// A collector over skeletal-mesh components.
    pub fn skeletal_meshes() -> Self {
        Self::new(MeshKind::Skeletal)
    }

    fn new(kind: MeshKind) -> Self {
        Self {
            kind,
            with_lods: 0,
            without_lods: 0,
            by_material_count: CountMap::new(),
        }
    }

    fn record(&mut self, mesh: &MeshComponent) {
        if mesh.has_single_lod() {
            self.without_lods += 1;
        } else {
            self.with_lods += 1;
        }

        self.by_material_count.bump(mesh.material_count);
    }
}

impl MetricCollector for MeshCollector {
    fn section_name(&self) -> &'static str {
        match self.kind {
            MeshKind::Static => "StaticMeshes",
            MeshKind::Skeletal => "SkeletalMeshes",
        }
    }

    fn observe(&mut self, actor: &Actor) -> Result<()> {
        match self.kind {
            MeshKind::Static => {
                for mesh in actor.static_meshes() {
                    self.record(mesh);
                }
            }
            MeshKind::Skeletal => {
                for mesh in actor.skeletal_meshes() {
                    self.record(mesh);
                }
            }
        }

        Ok(())
    }

    fn render_section(&self) -> Section {
        Section::new()
            .count("WithLODsCount", self.with_lods)
            .count("WithoutLODsCount", self.without_lods)
            .breakdown(
                "ByMaterialCount",
                self.by_material_count
                    .to_labeled(|count| format!("{count}_Materials")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MetricValue;
    use scene_model::Component;

    fn mesh_actor(name: &str, meshes: &[(u32, u32)], skeletal: bool) -> Actor {
        let mut actor = Actor::new(name, "MeshActor");
        for &(lods, materials) in meshes {
            let mesh = MeshComponent::new(lods, materials);
            actor = actor.with_component(if skeletal {
                Component::SkeletalMesh(mesh)
            } else {
                Component::StaticMesh(mesh)
            });
        }
        actor
    }

    #[test]
    fn lod_bucketing() {
        let mut collector = MeshCollector::static_meshes();
        collector
            .observe(&mesh_actor("A", &[(1, 2), (4, 2), (1, 0)], false))
            .unwrap();

        let section = collector.render_section();
        assert_eq!(section.scalar("WithLODsCount"), Some(1));
        assert_eq!(section.scalar("WithoutLODsCount"), Some(2));
    }

    #[test]
    fn zero_material_meshes_appear_in_breakdown() {
        let mut collector = MeshCollector::static_meshes();
        collector
            .observe(&mesh_actor("A", &[(1, 0), (1, 0), (2, 3)], false))
            .unwrap();

        let section = collector.render_section();
        let Some(MetricValue::Breakdown(entries)) = section.field("ByMaterialCount") else {
            panic!("ByMaterialCount should be a breakdown");
        };
        assert_eq!(
            entries,
            &vec![("0_Materials".to_string(), 2), ("3_Materials".to_string(), 1)]
        );
    }

    #[test]
    fn kinds_do_not_cross_observe() {
        let mixed = mesh_actor("A", &[(1, 1)], false)
            .with_component(Component::SkeletalMesh(MeshComponent::new(3, 2)));

        let mut static_collector = MeshCollector::static_meshes();
        let mut skeletal_collector = MeshCollector::skeletal_meshes();
        static_collector.observe(&mixed).unwrap();
        skeletal_collector.observe(&mixed).unwrap();

        let static_section = static_collector.render_section();
        assert_eq!(static_section.scalar("WithoutLODsCount"), Some(1));
        assert_eq!(static_section.scalar("WithLODsCount"), Some(0));

        let skeletal_section = skeletal_collector.render_section();
        assert_eq!(skeletal_section.scalar("WithLODsCount"), Some(1));
        assert_eq!(skeletal_section.scalar("WithoutLODsCount"), Some(0));
    }

    #[test]
    fn bucket_conservation() {
        let mut collector = MeshCollector::skeletal_meshes();
        let meshes = [(1, 0), (2, 1), (5, 1), (1, 4), (3, 2)];
        collector.observe(&mesh_actor("A", &meshes, true)).unwrap();

        let section = collector.render_section();
        let with = section.scalar("WithLODsCount").unwrap();
        let without = section.scalar("WithoutLODsCount").unwrap();
        assert_eq!(with + without, meshes.len() as u64);

        let Some(MetricValue::Breakdown(entries)) = section.field("ByMaterialCount") else {
            panic!("ByMaterialCount should be a breakdown");
        };
        let breakdown_total: u64 = entries.iter().map(|(_, count)| count).sum();
        assert_eq!(breakdown_total, meshes.len() as u64);
    }
}
