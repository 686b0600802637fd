//! In-memory scene graph supplied by the host engine.
//!
//! `scene-model` defines the read-only data the metrics engine traverses: a
//! flat, ordered sequence of [`Actor`]s, each owning zero or more typed
//! [`Component`]s. The host is responsible for loading and streaming-resolving
//! a level before materializing it as these types; nothing here performs I/O.
pub mod actor;
pub mod component;

pub use actor::{Actor, ActorClass};
pub use component::{
    Component, LightComponent, MeshComponent, Mobility, MobilityCode, ParticleSystemAsset,
    ParticleSystemComponent,
};
