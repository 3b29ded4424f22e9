//! Resolution log—an audit trail of arbitration decisions.
//!
//! Arbitration is not a hidden branch: whenever the resolver takes the
//! specialist-deference path it appends a structured entry recording
//! the strategy and the reason. The log is caller-owned state passed
//! into `resolve` by handle; the resolver only ever appends. Clearing
//! between batches, and synchronizing across concurrent callers, is
//! the caller's responsibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::strategy::ResolutionStrategy;

/// One arbitration decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionEntry {
    /// The strategy that was applied.
    pub strategy: ResolutionStrategy,

    /// Free-text reason naming the domain and the deference taken.
    pub reason: String,

    /// When the decision was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Ordered, append-only sequence of arbitration decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionLog {
    entries: Vec<ResolutionEntry>,
}

impl ResolutionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitration decision.
    pub fn record(&mut self, strategy: ResolutionStrategy, reason: impl Into<String>) {
        self.entries.push(ResolutionEntry {
            strategy,
            reason: reason.into(),
            recorded_at: Utc::now(),
        });
    }

    /// The recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ResolutionEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards all entries. Caller-invoked between batches; the
    /// resolver never calls this.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_starts_empty() {
        let log = ResolutionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_record_preserves_order() {
        let mut log = ResolutionLog::new();
        log.record(ResolutionStrategy::NuanceArbitration, "marriage defers");
        log.record(ResolutionStrategy::NuanceArbitration, "health defers");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].reason, "marriage defers");
        assert_eq!(log.entries()[1].reason, "health defers");
        assert!(log.entries()[0].recorded_at <= log.entries()[1].recorded_at);
    }

    #[test]
    fn test_clear() {
        let mut log = ResolutionLog::new();
        log.record(ResolutionStrategy::NuanceArbitration, "x");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_entry_serialization() {
        let mut log = ResolutionLog::new();
        log.record(ResolutionStrategy::NuanceArbitration, "marriage defers");
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("nuance_arbitration"));
        let back: ResolutionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
    }
}
