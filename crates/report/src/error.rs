//! Output-sink errors.
//!
//! A sink failure never invalidates the aggregation that produced the report:
//! the in-memory report and any console rendering already emitted remain
//! valid, and callers may treat "observed but not persisted" as a partial
//! success.

/// Errors raised while rendering or persisting a report.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Filesystem failure while creating the output directory or writing the
    /// report file.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SinkError>;
