//! Deterministic content-metrics aggregation over a scene graph.
//!
//! `metrics-core` scans a flat, ordered list of [`scene_model::Actor`]s once
//! and accumulates per-category statistics through a fixed set of independent
//! [`collect::MetricCollector`]s. The [`driver::AggregationDriver`] owns the
//! traversal contract: one forward pass, every collector observing every
//! actor in registration order, then one render pass that merges each
//! collector's section into a single ordered [`report::Report`].
//!
//! Aggregation is a pure function of the input sequence: running it twice
//! over the same actors yields byte-identical reports.
pub mod accum;
pub mod collect;
pub mod driver;
pub mod error;
pub mod report;

pub use accum::CountMap;
pub use collect::{
    ActorCollector, LightCollector, MeshCollector, MetricCollector, ParticleSystemCollector,
    standard_collectors,
};
pub use driver::{AggregationDriver, aggregate};
pub use error::MetricsError;
pub use report::{MetricValue, Report, Section};
