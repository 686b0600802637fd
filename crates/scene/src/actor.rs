//! Placed objects and their class identity.

use crate::component::{
    Component, LightComponent, MeshComponent, ParticleSystemComponent,
};

/// Human-readable class identity of an actor, used as a grouping key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorClass(String);

impl ActorClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The class name as rendered into reports.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorClass {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ActorClass {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A placed object in a level.
///
/// Actors are owned and supplied wholesale by the host engine and are
/// read-only to the metrics engine. Names are unique within a level at the
/// time of traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    name: String,
    class: ActorClass,
    components: Vec<Component>,
}

impl Actor {
    /// Creates an actor with no components.
    pub fn new(name: impl Into<String>, class: impl Into<ActorClass>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            components: Vec::new(),
        }
    }

    /// Attaches a component (builder style, for hosts and fixtures).
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &ActorClass {
        &self.class
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Light components owned by this actor.
    pub fn lights(&self) -> impl Iterator<Item = &LightComponent> {
        self.components.iter().filter_map(|c| match c {
            Component::Light(light) => Some(light),
            _ => None,
        })
    }

    /// Static-mesh components owned by this actor.
    pub fn static_meshes(&self) -> impl Iterator<Item = &MeshComponent> {
        self.components.iter().filter_map(|c| match c {
            Component::StaticMesh(mesh) => Some(mesh),
            _ => None,
        })
    }

    /// Skeletal-mesh components owned by this actor.
    pub fn skeletal_meshes(&self) -> impl Iterator<Item = &MeshComponent> {
        self.components.iter().filter_map(|c| match c {
            Component::SkeletalMesh(mesh) => Some(mesh),
            _ => None,
        })
    }

    /// Particle system components owned by this actor.
    pub fn particle_systems(&self) -> impl Iterator<Item = &ParticleSystemComponent> {
        self.components.iter().filter_map(|c| match c {
            Component::ParticleSystem(system) => Some(system),
            _ => None,
        })
    }
}
