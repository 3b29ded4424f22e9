//! Per-domain agent weight tables.
//!
//! A weight table is read-only configuration: for each domain, a base
//! weight in [0.0, 1.0] per agent identity. Lookups never fail—an
//! unknown domain falls back to the designated default domain's table,
//! and an unknown agent within a known domain receives the fixed
//! default weight. Weights per domain need not sum to 1; they are
//! renormalized by confidence during resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Base weight assigned to agents absent from a domain's table.
pub const DEFAULT_AGENT_WEIGHT: f32 = 0.25;

/// Read-only per-domain agent weight configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    domains: HashMap<String, HashMap<String, f32>>,
    default_domain: String,
    default_weight: f32,
}

impl WeightTable {
    /// Creates an empty table with the given fallback domain.
    #[must_use]
    pub fn new(default_domain: impl Into<String>) -> Self {
        Self {
            domains: HashMap::new(),
            default_domain: default_domain.into(),
            default_weight: DEFAULT_AGENT_WEIGHT,
        }
    }

    /// The standard table: career, marriage, and health over the four
    /// standard agents, with career as the fallback domain.
    #[must_use]
    pub fn standard() -> Self {
        Self::new("career")
            .with_weight("career", "integration_specialist", 0.30)
            .with_weight("career", "mathematics_validator", 0.20)
            .with_weight("career", "risk_assessor", 0.25)
            .with_weight("career", "nuance_specialist", 0.25)
            .with_weight("marriage", "integration_specialist", 0.20)
            .with_weight("marriage", "mathematics_validator", 0.10)
            .with_weight("marriage", "risk_assessor", 0.30)
            .with_weight("marriage", "nuance_specialist", 0.40)
            .with_weight("health", "integration_specialist", 0.25)
            .with_weight("health", "mathematics_validator", 0.15)
            .with_weight("health", "risk_assessor", 0.35)
            .with_weight("health", "nuance_specialist", 0.25)
    }

    /// Adds a base weight for an agent within a domain, clamped to
    /// [0.0, 1.0].
    #[must_use]
    pub fn with_weight(
        mut self,
        domain: impl Into<String>,
        agent_id: impl Into<String>,
        weight: f32,
    ) -> Self {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(agent_id.into(), weight.clamp(0.0, 1.0));
        self
    }

    /// Overrides the default weight for unknown agents, clamped to
    /// [0.0, 1.0].
    #[must_use]
    pub fn with_default_weight(mut self, weight: f32) -> Self {
        self.default_weight = weight.clamp(0.0, 1.0);
        self
    }

    /// The domain used when a requested domain has no table.
    #[must_use]
    pub fn default_domain(&self) -> &str {
        &self.default_domain
    }

    /// The weight used for agents absent from a domain's table.
    #[must_use]
    pub const fn default_weight(&self) -> f32 {
        self.default_weight
    }

    /// Returns true if the table carries weights for the domain itself
    /// (no fallback considered).
    #[must_use]
    pub fn knows_domain(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    /// Looks up an agent's base weight for a domain.
    ///
    /// Unknown domains use the default domain's table; unknown agents
    /// use the default weight.
    #[must_use]
    pub fn base_weight(&self, domain: &str, agent_id: &str) -> f32 {
        let table = self
            .domains
            .get(domain)
            .or_else(|| self.domains.get(&self.default_domain));
        table
            .and_then(|t| t.get(agent_id))
            .copied()
            .unwrap_or(self.default_weight)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_lookups() {
        let table = WeightTable::standard();
        assert_eq!(table.base_weight("career", "integration_specialist"), 0.30);
        assert_eq!(table.base_weight("marriage", "nuance_specialist"), 0.40);
        assert_eq!(table.base_weight("health", "risk_assessor"), 0.35);
    }

    #[test]
    fn test_unknown_domain_falls_back_to_default_domain() {
        let table = WeightTable::standard();
        // "wealth" is not configured; career's weights apply.
        assert_eq!(table.base_weight("wealth", "mathematics_validator"), 0.20);
        assert!(!table.knows_domain("wealth"));
        assert!(table.knows_domain("career"));
    }

    #[test]
    fn test_unknown_agent_gets_default_weight() {
        let table = WeightTable::standard();
        assert_eq!(
            table.base_weight("career", "astro_novice"),
            DEFAULT_AGENT_WEIGHT
        );
    }

    #[test]
    fn test_unknown_domain_and_agent() {
        let table = WeightTable::standard();
        assert_eq!(table.base_weight("wealth", "nobody"), DEFAULT_AGENT_WEIGHT);
    }

    #[test]
    fn test_empty_table_always_defaults() {
        let table = WeightTable::new("career").with_default_weight(0.5);
        assert_eq!(table.base_weight("career", "anyone"), 0.5);
        assert_eq!(table.base_weight("other", "anyone"), 0.5);
    }

    #[test]
    fn test_weight_clamping() {
        let table = WeightTable::new("d").with_weight("d", "a", 1.7);
        assert_eq!(table.base_weight("d", "a"), 1.0);
        let table = WeightTable::new("d").with_default_weight(-0.3);
        assert_eq!(table.default_weight(), 0.0);
    }

    #[test]
    fn test_table_serialization() {
        let table = WeightTable::standard();
        let json = serde_json::to_string(&table).unwrap();
        let back: WeightTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
