//! Consensus result—the structured answer for one (domain, batch) pair.
//!
//! The result is an immutable value produced fresh per call. Beyond the
//! blended score it carries the provenance of the decision: which
//! strategy ran, how many conflicts were detected and resolved, and
//! what each agent contributed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::response::CertaintyLevel;
use crate::strategy::{AgreementLevel, ResolutionStrategy, SavTier};

/// The resolver's output for one domain and one response batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// The domain that was resolved.
    pub domain: String,

    /// The blended consensus score.
    pub final_score: f32,

    /// Fixed descriptive interpretation ("`{domain}` analysis complete").
    pub final_interpretation: String,

    /// Final confidence after the agreement adjustment, in [0.0, 1.0].
    pub confidence: f32,

    /// Certainty label derived from the final confidence.
    pub certainty: CertaintyLevel,

    /// How tightly the batch's raw scores clustered.
    pub agreement: AgreementLevel,

    /// The resolution path that produced the final score.
    pub strategy_used: ResolutionStrategy,

    /// Responses that deviated from the initial estimate past the
    /// conflict threshold.
    pub conflicts_detected: usize,

    /// Always equals `conflicts_detected`: every detected conflict is
    /// resolved by construction, there is no partial-resolution state.
    pub conflicts_resolved: usize,

    /// Each agent's reported contribution weight, rounded to three
    /// decimals. Note: this is `base_weight * stated_confidence`—the
    /// dasha adjustment applied to the effective weights in the initial
    /// estimate is deliberately excluded here, preserving the observed
    /// reporting behavior.
    pub agent_contributions: HashMap<String, f32>,

    /// True if any response carried a dasha weight.
    pub dasha_adjusted: bool,

    /// Tier derived from the batch's SAV numerators.
    pub sav_tier: SavTier,
}

impl ConsensusResult {
    /// Projects the result into its display form: score rounded to two
    /// decimals, confidence to three, labels rendered as strings.
    #[must_use]
    pub fn to_report(&self) -> serde_json::Value {
        json!({
            "domain": self.domain,
            "final_score": round_to(self.final_score, 2),
            "confidence": round_to(self.confidence, 3),
            "certainty_level": self.certainty.to_string(),
            "agreement_level": self.agreement.to_string(),
            "strategy_used": self.strategy_used.to_string(),
            "conflicts_detected": self.conflicts_detected,
            "conflicts_resolved": self.conflicts_resolved,
            "dasha_adjusted": self.dasha_adjusted,
            "sav_tier": self.sav_tier.to_string(),
        })
    }
}

/// Rounds to the given number of decimal places.
pub(crate) fn round_to(value: f32, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (f64::from(value) * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConsensusResult {
        ConsensusResult {
            domain: "career".to_string(),
            final_score: 77.43219,
            final_interpretation: "career analysis complete".to_string(),
            confidence: 0.85749,
            certainty: CertaintyLevel::High,
            agreement: AgreementLevel::High,
            strategy_used: ResolutionStrategy::Unanimous,
            conflicts_detected: 0,
            conflicts_resolved: 0,
            agent_contributions: HashMap::from([("risk_assessor".to_string(), 0.205)]),
            dasha_adjusted: true,
            sav_tier: SavTier::AboveAverage,
        }
    }

    #[test]
    fn test_report_rounding() {
        let report = sample().to_report();
        assert_eq!(report["final_score"], 77.43);
        assert_eq!(report["confidence"], 0.857);
    }

    #[test]
    fn test_report_labels_are_strings() {
        let report = sample().to_report();
        assert_eq!(report["strategy_used"], "unanimous");
        assert_eq!(report["certainty_level"], "high");
        assert_eq!(report["agreement_level"], "high");
        assert_eq!(report["sav_tier"], "above_average");
        assert_eq!(report["dasha_adjusted"], true);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.85749, 3), 0.857);
        assert_eq!(round_to(1.2345, 2), 1.23);
        assert_eq!(round_to(63.0, 2), 63.0);
    }

    #[test]
    fn test_result_serialization() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: ConsensusResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
