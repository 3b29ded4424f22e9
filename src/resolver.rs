//! The consensus resolver.
//!
//! One deterministic computation over an in-memory batch: blend the
//! agents' scores by configured weight and confidence, detect outliers
//! against the initial estimate, and either stand by the estimate,
//! defer to a privileged specialist, or re-average the most confident
//! responses. Identical inputs and configuration always yield an
//! identical result; the only side effect is the arbitration log.

use std::collections::HashMap;

use crate::error::{ConsensusError, ResolveResult};
use crate::log::ResolutionLog;
use crate::outcome::{round_to, ConsensusResult};
use crate::policy::ArbitrationPolicy;
use crate::response::{AgentResponse, CertaintyLevel};
use crate::strategy::{AgreementLevel, ResolutionStrategy, SavTier};
use crate::weights::WeightTable;

/// Default deviation from the initial estimate past which a response
/// counts as a conflict.
pub const CONFLICT_THRESHOLD: f32 = 15.0;

/// Neutral midpoint score used when all effective weights are zero.
pub const NEUTRAL_SCORE: f32 = 50.0;

/// How many of the most confident responses the majority rescore uses.
const MAJORITY_PANEL_SIZE: usize = 3;

/// Resolves batches of agent responses into consensus results.
///
/// Holds only read-only configuration; the resolver itself is freely
/// shareable across threads. The arbitration log is passed into
/// [`resolve`](Self::resolve) by exclusive handle, so concurrent
/// callers need one log each or external synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusResolver {
    weights: WeightTable,
    policy: ArbitrationPolicy,
    conflict_threshold: f32,
}

impl ConsensusResolver {
    /// Creates a resolver with the standard weight table, the standard
    /// arbitration policy, and the default conflict threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: WeightTable::standard(),
            policy: ArbitrationPolicy::standard(),
            conflict_threshold: CONFLICT_THRESHOLD,
        }
    }

    /// Replaces the weight table.
    #[must_use]
    pub fn with_weights(mut self, weights: WeightTable) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the arbitration policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ArbitrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the conflict threshold.
    #[must_use]
    pub fn with_conflict_threshold(mut self, threshold: f32) -> Self {
        self.conflict_threshold = threshold;
        self
    }

    /// The configured conflict threshold.
    #[must_use]
    pub const fn conflict_threshold(&self) -> f32 {
        self.conflict_threshold
    }

    /// The configured weight table.
    #[must_use]
    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// The configured arbitration policy.
    #[must_use]
    pub const fn policy(&self) -> &ArbitrationPolicy {
        &self.policy
    }

    /// Resolves a batch of responses for a domain.
    ///
    /// Appends one entry to `log` when the specialist-deference branch
    /// runs; the majority and unanimous branches leave the log alone.
    /// The log is never cleared here.
    ///
    /// # Errors
    ///
    /// Returns `ConsensusError::EmptyBatch` if `responses` is empty.
    /// Every other irregular input (malformed SAV strings, unknown
    /// domains or agents, all-zero confidences) resolves via fallback.
    pub fn resolve(
        &self,
        responses: &[AgentResponse],
        domain: &str,
        log: &mut ResolutionLog,
    ) -> ResolveResult<ConsensusResult> {
        if responses.is_empty() {
            return Err(ConsensusError::EmptyBatch {
                domain: domain.to_string(),
            });
        }

        // Step 1: weighted initial estimate.
        let mut weighted_sum = 0.0f32;
        let mut weight_total = 0.0f32;
        let mut dasha_adjusted = false;
        let mut sav_numerators = Vec::new();
        for response in responses {
            let base = self.weights.base_weight(domain, &response.agent_id);
            let mut effective_confidence = response.confidence;
            if let Some(dasha) = response.dasha_weight {
                // A signal of 0 halves confidence; a signal of 1 leaves it unchanged.
                effective_confidence *= 0.5 + 0.5 * dasha;
                dasha_adjusted = true;
            }
            let effective_weight = base * effective_confidence;
            weighted_sum += response.score * effective_weight;
            weight_total += effective_weight;

            if let Some(numerator) = response.sav_numerator() {
                sav_numerators.push(numerator);
            }
        }
        let initial_score = if weight_total > 0.0 {
            weighted_sum / weight_total
        } else {
            NEUTRAL_SCORE
        };

        // Step 2: SAV tier from the parsed numerators.
        let avg_sav = if sav_numerators.is_empty() {
            SavTier::NEUTRAL_AVERAGE
        } else {
            sav_numerators.iter().sum::<i64>() as f32 / sav_numerators.len() as f32
        };
        let sav_tier = SavTier::from_average(avg_sav);

        // Step 3: conflicts are measured against the initial estimate,
        // never against a later-revised score.
        let conflicts: Vec<&AgentResponse> = responses
            .iter()
            .filter(|r| (r.score - initial_score).abs() > self.conflict_threshold)
            .collect();

        // Step 4: strategy selection.
        let (final_score, strategy) = if conflicts.is_empty() {
            (initial_score, ResolutionStrategy::Unanimous)
        } else if let Some((rule, specialist)) = self.deference_match(domain, &conflicts) {
            log.record(
                ResolutionStrategy::NuanceArbitration,
                format!("{domain} defers to {}", rule.specialist_id),
            );
            (
                rule.blend(specialist.score, initial_score),
                ResolutionStrategy::NuanceArbitration,
            )
        } else {
            (
                Self::majority_rescore(responses),
                ResolutionStrategy::WeightedMajority,
            )
        };

        // Step 5: agreement and final confidence.
        let max_score = responses.iter().map(|r| r.score).fold(f32::MIN, f32::max);
        let min_score = responses.iter().map(|r| r.score).fold(f32::MAX, f32::min);
        let agreement = AgreementLevel::from_score_range(max_score - min_score);
        let avg_confidence =
            responses.iter().map(|r| r.confidence).sum::<f32>() / responses.len() as f32;
        let confidence = (avg_confidence + agreement.confidence_adjustment()).clamp(0.0, 1.0);
        let certainty = CertaintyLevel::from_confidence(confidence);

        // Reported contributions use the stated confidence, not the
        // dasha-adjusted effective confidence of step 1.
        let agent_contributions: HashMap<String, f32> = responses
            .iter()
            .map(|r| {
                let base = self.weights.base_weight(domain, &r.agent_id);
                #[allow(clippy::cast_possible_truncation)]
                let rounded = round_to(base * r.confidence, 3) as f32;
                (r.agent_id.clone(), rounded)
            })
            .collect();

        Ok(ConsensusResult {
            domain: domain.to_string(),
            final_score,
            final_interpretation: format!("{domain} analysis complete"),
            confidence,
            certainty,
            agreement,
            strategy_used: strategy,
            conflicts_detected: conflicts.len(),
            conflicts_resolved: conflicts.len(),
            agent_contributions,
            dasha_adjusted,
            sav_tier,
        })
    }

    /// Finds the arbitration rule and the conflicting specialist
    /// response it applies to, if the domain defers and the specialist
    /// is among the conflicts.
    fn deference_match<'a>(
        &'a self,
        domain: &str,
        conflicts: &[&'a AgentResponse],
    ) -> Option<(&'a crate::policy::ArbitrationRule, &'a AgentResponse)> {
        let rule = self.policy.rule_for(domain)?;
        let specialist = conflicts
            .iter()
            .find(|c| c.agent_id == rule.specialist_id)
            .copied()?;
        Some((rule, specialist))
    }

    /// Confidence-weighted average of the most confident responses,
    /// ignoring base weights and the dasha signal. Ties keep input
    /// order (stable sort). Falls back to the plain mean of the panel
    /// if every selected confidence is zero.
    fn majority_rescore(responses: &[AgentResponse]) -> f32 {
        let mut ranked: Vec<&AgentResponse> = responses.iter().collect();
        ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        let panel = &ranked[..ranked.len().min(MAJORITY_PANEL_SIZE)];

        let confidence_total: f32 = panel.iter().map(|r| r.confidence).sum();
        if confidence_total > 0.0 {
            panel.iter().map(|r| r.score * r.confidence).sum::<f32>() / confidence_total
        } else {
            panel.iter().map(|r| r.score).sum::<f32>() / panel.len() as f32
        }
    }
}

impl Default for ConsensusResolver {
    fn default() -> Self {
        Self::new()
    }
}
