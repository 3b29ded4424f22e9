//! Agent responses—one scorer's opinion for one domain.
//!
//! A response pairs a numeric score with a stated confidence, plus the
//! auxiliary signals the resolver knows how to use: an optional dasha
//! weight that modulates confidence and an optional SAV score string
//! ("32/48") whose numerator feeds the batch tier. Score and confidence
//! are independent: a response may be highly confident yet numerically
//! extreme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

/// Discrete certainty label assigned by the agent itself.
///
/// This is the agent's own self-report; the resolver derives its own
/// certainty for the consensus from the final confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertaintyLevel {
    /// Confidence above 0.8.
    High,

    /// Confidence above 0.5.
    Medium,

    /// Everything below.
    Low,
}

impl CertaintyLevel {
    /// Classifies a confidence value into a certainty label.
    /// High above 0.8, medium above 0.5, low otherwise.
    #[must_use]
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > 0.8 {
            Self::High
        } else if confidence > 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for CertaintyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// One agent's scored opinion for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Identity of the scoring agent (e.g. "risk_assessor").
    pub agent_id: String,

    /// The axis of evaluation this response addresses.
    pub domain: String,

    /// Free-text reading behind the score.
    pub interpretation: String,

    /// Numeric score. Unbounded, conventionally 0–100.
    pub score: f32,

    /// Stated confidence in [0.0, 1.0].
    pub confidence: f32,

    /// The agent's self-assigned certainty label.
    pub certainty: CertaintyLevel,

    /// Factors supporting the score, in the agent's order.
    #[serde(default)]
    pub supporting_factors: Vec<String>,

    /// Factors cutting against the score, in the agent's order.
    #[serde(default)]
    pub contradicting_factors: Vec<String>,

    /// Optional secondary weighting signal in [0.0, 1.0]. When present,
    /// the resolver scales stated confidence by `0.5 + 0.5 * weight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dasha_weight: Option<f32>,

    /// Optional fractional SAV score, formatted "`<num>/<den>`".
    /// Malformed or absent values are tolerated and skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sav_score: Option<String>,
}

impl AgentResponse {
    /// Starts building a response for an agent and domain.
    #[must_use]
    pub fn builder(agent_id: impl Into<String>, domain: impl Into<String>) -> AgentResponseBuilder {
        AgentResponseBuilder {
            agent_id: agent_id.into(),
            domain: domain.into(),
            interpretation: String::new(),
            score: 0.0,
            confidence: 0.0,
            certainty: None,
            supporting_factors: Vec::new(),
            contradicting_factors: Vec::new(),
            dasha_weight: None,
            sav_score: None,
        }
    }

    /// Parses the numerator of the SAV score string, if well formed.
    ///
    /// The numerator is whatever precedes the first `/`, trimmed and
    /// parsed as an integer; a string with no `/` that is itself an
    /// integer also counts. Anything else yields `None`.
    #[must_use]
    pub fn sav_numerator(&self) -> Option<i64> {
        let raw = self.sav_score.as_deref()?;
        raw.split('/').next()?.trim().parse().ok()
    }
}

/// Builder for [`AgentResponse`] with input validation.
#[derive(Debug, Clone)]
pub struct AgentResponseBuilder {
    agent_id: String,
    domain: String,
    interpretation: String,
    score: f32,
    confidence: f32,
    certainty: Option<CertaintyLevel>,
    supporting_factors: Vec<String>,
    contradicting_factors: Vec<String>,
    dasha_weight: Option<f32>,
    sav_score: Option<String>,
}

impl AgentResponseBuilder {
    /// Sets the free-text interpretation.
    #[must_use]
    pub fn interpretation(mut self, text: impl Into<String>) -> Self {
        self.interpretation = text.into();
        self
    }

    /// Sets the numeric score.
    #[must_use]
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Sets the stated confidence. Validated to [0.0, 1.0] at build time.
    #[must_use]
    pub fn confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the agent's self-assigned certainty label. When omitted,
    /// the label is derived from the stated confidence.
    #[must_use]
    pub fn certainty(mut self, certainty: CertaintyLevel) -> Self {
        self.certainty = Some(certainty);
        self
    }

    /// Appends a supporting factor.
    #[must_use]
    pub fn supporting(mut self, factor: impl Into<String>) -> Self {
        self.supporting_factors.push(factor.into());
        self
    }

    /// Appends a contradicting factor.
    #[must_use]
    pub fn contradicting(mut self, factor: impl Into<String>) -> Self {
        self.contradicting_factors.push(factor.into());
        self
    }

    /// Sets the dasha weight. Validated to [0.0, 1.0] at build time.
    #[must_use]
    pub fn dasha_weight(mut self, weight: f32) -> Self {
        self.dasha_weight = Some(weight);
        self
    }

    /// Sets the SAV score string. Not validated; malformed strings are
    /// tolerated downstream.
    #[must_use]
    pub fn sav_score(mut self, sav: impl Into<String>) -> Self {
        self.sav_score = Some(sav.into());
        self
    }

    /// Builds the response.
    ///
    /// # Errors
    ///
    /// Returns `ConsensusError::EmptyField` if the agent id or domain is
    /// empty, `ConfidenceOutOfRange` if confidence is not in [0.0, 1.0]
    /// or is NaN, and `DashaWeightOutOfRange` likewise for the dasha
    /// weight when present.
    pub fn build(self) -> Result<AgentResponse, ConsensusError> {
        if self.agent_id.is_empty() {
            return Err(ConsensusError::EmptyField { field: "agent_id" });
        }
        if self.domain.is_empty() {
            return Err(ConsensusError::EmptyField { field: "domain" });
        }
        if self.confidence.is_nan() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(ConsensusError::ConfidenceOutOfRange {
                value: self.confidence,
            });
        }
        if let Some(w) = self.dasha_weight {
            if w.is_nan() || !(0.0..=1.0).contains(&w) {
                return Err(ConsensusError::DashaWeightOutOfRange { value: w });
            }
        }

        let certainty = self
            .certainty
            .unwrap_or_else(|| CertaintyLevel::from_confidence(self.confidence));

        Ok(AgentResponse {
            agent_id: self.agent_id,
            domain: self.domain,
            interpretation: self.interpretation,
            score: self.score,
            confidence: self.confidence,
            certainty,
            supporting_factors: self.supporting_factors,
            contradicting_factors: self.contradicting_factors,
            dasha_weight: self.dasha_weight,
            sav_score: self.sav_score,
        })
    }
}
