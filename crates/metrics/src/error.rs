//! Aggregation errors.
//!
//! The scene data is assumed well-formed; any deviation from the documented
//! data model is an invariant violation that aborts the current level's
//! traversal. These are explicit error values rather than assertions so a
//! batch processing many levels can skip the poisoned one and continue.

/// Errors raised while aggregating one level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// A light component carried a mobility code outside the closed
    /// {Static, Stationary, Movable} enumeration. Identifies the owning
    /// actor so the offending placement can be found in the level.
    #[error("light component on actor `{actor}` has unknown mobility code {code}")]
    UnknownMobility {
        /// Name of the actor owning the offending light.
        actor: String,
        /// The raw, untranslatable code the host supplied.
        code: u8,
    },
}

impl MetricsError {
    /// True when the error indicates scene data outside the documented model,
    /// as opposed to an ordinary "no data" condition (which is never an error).
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::UnknownMobility { .. })
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
