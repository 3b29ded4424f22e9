//! Closed label sets used by the resolver.
//!
//! Strategies, agreement levels, and SAV tiers are enumerated values,
//! not free strings, so an invalid label is unrepresentable. The
//! classification thresholds live next to the labels they produce.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which resolution path produced the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// No response deviated past the conflict threshold; the weighted
    /// initial estimate stands.
    Unanimous,

    /// Conflicts existed; the three most confident responses were
    /// re-averaged by stated confidence alone.
    WeightedMajority,

    /// A privileged specialist diverged in a domain that defers to it;
    /// its score was blended with the initial estimate.
    NuanceArbitration,

    /// Reserved: deference to a mathematical validator. Part of the
    /// closed strategy set but not selected by any current path.
    MathOverride,
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unanimous => write!(f, "unanimous"),
            Self::WeightedMajority => write!(f, "weighted_majority"),
            Self::NuanceArbitration => write!(f, "nuance_arbitration"),
            Self::MathOverride => write!(f, "math_override"),
        }
    }
}

/// How tightly the batch's raw scores cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementLevel {
    /// Score range of at most 10 points.
    High,

    /// Score range of at most 20 points.
    Medium,

    /// Score range above 20 points.
    Low,
}

impl AgreementLevel {
    /// Classifies a score range (max − min) into an agreement level.
    /// Both boundaries are inclusive.
    #[must_use]
    pub fn from_score_range(range: f32) -> Self {
        if range <= 10.0 {
            Self::High
        } else if range <= 20.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Adjustment applied to the mean confidence for this agreement level.
    #[must_use]
    pub const fn confidence_adjustment(self) -> f32 {
        match self {
            Self::High => 0.1,
            Self::Medium => 0.0,
            Self::Low => -0.1,
        }
    }
}

impl fmt::Display for AgreementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Tier derived from the batch's average SAV numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavTier {
    /// Average numerator of 30 or more.
    AboveAverage,

    /// Average numerator of 25 or more.
    Average,

    /// Everything below.
    BelowAverage,
}

impl SavTier {
    /// Neutral numerator assumed when no SAV string in the batch parses.
    pub const NEUTRAL_AVERAGE: f32 = 28.0;

    /// Classifies an average SAV numerator into a tier.
    #[must_use]
    pub fn from_average(avg: f32) -> Self {
        if avg >= 30.0 {
            Self::AboveAverage
        } else if avg >= 25.0 {
            Self::Average
        } else {
            Self::BelowAverage
        }
    }
}

impl fmt::Display for SavTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AboveAverage => write!(f, "above_average"),
            Self::Average => write!(f, "average"),
            Self::BelowAverage => write!(f, "below_average"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreement_boundaries_inclusive() {
        assert_eq!(AgreementLevel::from_score_range(10.0), AgreementLevel::High);
        assert_eq!(
            AgreementLevel::from_score_range(10.0001),
            AgreementLevel::Medium
        );
        assert_eq!(
            AgreementLevel::from_score_range(20.0),
            AgreementLevel::Medium
        );
        assert_eq!(AgreementLevel::from_score_range(20.0001), AgreementLevel::Low);
        assert_eq!(AgreementLevel::from_score_range(0.0), AgreementLevel::High);
    }

    #[test]
    fn test_agreement_confidence_adjustment() {
        assert_eq!(AgreementLevel::High.confidence_adjustment(), 0.1);
        assert_eq!(AgreementLevel::Medium.confidence_adjustment(), 0.0);
        assert_eq!(AgreementLevel::Low.confidence_adjustment(), -0.1);
    }

    #[test]
    fn test_sav_tier_thresholds() {
        assert_eq!(SavTier::from_average(32.0), SavTier::AboveAverage);
        assert_eq!(SavTier::from_average(30.0), SavTier::AboveAverage);
        assert_eq!(SavTier::from_average(29.9), SavTier::Average);
        assert_eq!(SavTier::from_average(25.0), SavTier::Average);
        assert_eq!(SavTier::from_average(24.9), SavTier::BelowAverage);
    }

    #[test]
    fn test_neutral_average_is_average_tier() {
        assert_eq!(SavTier::from_average(SavTier::NEUTRAL_AVERAGE), SavTier::Average);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(format!("{}", ResolutionStrategy::Unanimous), "unanimous");
        assert_eq!(
            format!("{}", ResolutionStrategy::WeightedMajority),
            "weighted_majority"
        );
        assert_eq!(
            format!("{}", ResolutionStrategy::NuanceArbitration),
            "nuance_arbitration"
        );
        assert_eq!(format!("{}", ResolutionStrategy::MathOverride), "math_override");
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&ResolutionStrategy::NuanceArbitration).unwrap();
        assert_eq!(json, "\"nuance_arbitration\"");
        let back: ResolutionStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResolutionStrategy::NuanceArbitration);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(format!("{}", SavTier::AboveAverage), "above_average");
        assert_eq!(format!("{}", SavTier::BelowAverage), "below_average");
    }
}
