//! Report persistence and the per-level processing flow.
//!
//! `report-sink` sits at the collaborator boundary of the metrics engine: it
//! takes a finished [`metrics_core::Report`], renders it for the operator log,
//! and persists it as pretty JSON named after the source level under a
//! configurable output directory. It also provides the batch flow that keeps
//! one level's failure from stopping the rest.
pub mod batch;
pub mod error;
pub mod writer;

pub use batch::{LevelOutcome, process_batch, process_level};
pub use error::SinkError;
pub use writer::{ReportWriter, render_pretty};
