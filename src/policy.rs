//! Arbitration policy—which domains defer to which specialist.
//!
//! The privileged-domain special case is a policy table, not an inline
//! conditional: each entry maps a domain to the specialist agent whose
//! conflicting signal overrides majority recomputation, plus the blend
//! share that specialist receives. New domains are added by extending
//! the table; the resolver core never changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Deference rule for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrationRule {
    /// Agent whose conflicting response triggers arbitration.
    pub specialist_id: String,

    /// Share of the final score taken from the specialist's score;
    /// the remainder comes from the initial estimate. Clamped to
    /// [0.0, 1.0].
    pub specialist_share: f32,
}

impl ArbitrationRule {
    /// Creates a rule deferring to the given agent with the given share.
    #[must_use]
    pub fn new(specialist_id: impl Into<String>, specialist_share: f32) -> Self {
        Self {
            specialist_id: specialist_id.into(),
            specialist_share: specialist_share.clamp(0.0, 1.0),
        }
    }

    /// Blends the specialist's score with the initial estimate.
    #[must_use]
    pub fn blend(&self, specialist_score: f32, initial_score: f32) -> f32 {
        self.specialist_share * specialist_score + (1.0 - self.specialist_share) * initial_score
    }
}

/// Domain → deference rule mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArbitrationPolicy {
    rules: HashMap<String, ArbitrationRule>,
}

impl ArbitrationPolicy {
    /// Creates an empty policy (no domain ever arbitrates).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard policy: marriage and health defer to the nuance
    /// specialist with a 60/40 blend.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_rule("marriage", ArbitrationRule::new("nuance_specialist", 0.6))
            .with_rule("health", ArbitrationRule::new("nuance_specialist", 0.6))
    }

    /// Adds or replaces the rule for a domain.
    #[must_use]
    pub fn with_rule(mut self, domain: impl Into<String>, rule: ArbitrationRule) -> Self {
        self.rules.insert(domain.into(), rule);
        self
    }

    /// Removes the rule for a domain, if any.
    #[must_use]
    pub fn without_rule(mut self, domain: &str) -> Self {
        self.rules.remove(domain);
        self
    }

    /// Returns the rule for a domain, if the domain arbitrates.
    #[must_use]
    pub fn rule_for(&self, domain: &str) -> Option<&ArbitrationRule> {
        self.rules.get(domain)
    }
}
