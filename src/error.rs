//! Error types for panchayat.
//!
//! All errors are strongly typed using thiserror. The resolver itself
//! can only fail on an empty batch; everything else the algorithm
//! tolerates via documented fallbacks. The remaining variants are
//! surfaced by the `AgentResponse` builder during input validation.

use thiserror::Error;

/// Errors produced while building inputs or resolving a batch.
#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("Cannot resolve an empty batch for domain '{domain}'")]
    EmptyBatch {
        domain: String,
    },

    #[error("Confidence value {value} is out of range [0.0, 1.0]")]
    ConfidenceOutOfRange {
        value: f32,
    },

    #[error("Dasha weight {value} is out of range [0.0, 1.0]")]
    DashaWeightOutOfRange {
        value: f32,
    },

    #[error("Required field '{field}' cannot be empty")]
    EmptyField {
        field: &'static str,
    },
}

impl ConsensusError {
    /// Returns true if this error is the empty-batch precondition failure.
    #[must_use]
    pub const fn is_empty_batch(&self) -> bool {
        matches!(self, Self::EmptyBatch { .. })
    }

    /// Returns true if this error came from input validation
    /// (as opposed to the resolve precondition).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !self.is_empty_batch()
    }
}

/// Result type alias for panchayat operations.
pub type ResolveResult<T> = Result<T, ConsensusError>;
