//! # Panchayat - Consensus resolution for multi-agent scoring
//!
//! Panchayat merges the opinions of several independent scoring agents
//! into one authoritative result. Each agent evaluates the same subject
//! along a single numeric axis (a *domain*) and reports a score, a
//! confidence, and auxiliary signals; the resolver blends them by
//! configured weight, detects conflicting outliers, and arbitrates via
//! domain-specific strategies with full provenance.
//!
//! ## Core Concepts
//!
//! - **AgentResponse**: one agent's scored opinion for one domain
//! - **WeightTable**: read-only per-domain base weights with fallbacks
//! - **ArbitrationPolicy**: which domains defer to which specialist
//! - **ConsensusResult**: the blended score plus decision provenance
//! - **ResolutionLog**: caller-owned audit trail of arbitration decisions
//!
//! ## Usage
//!
//! ```rust
//! use panchayat::{AgentResponse, ConsensusResolver, ResolutionLog};
//!
//! let batch = vec![
//!     AgentResponse::builder("risk_assessor", "career")
//!         .score(81.0)
//!         .confidence(0.82)
//!         .interpretation("No structural risk")
//!         .build()
//!         .unwrap(),
//!     AgentResponse::builder("mathematics_validator", "career")
//!         .score(75.0)
//!         .confidence(0.95)
//!         .sav_score("32/48")
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let resolver = ConsensusResolver::new();
//! let mut log = ResolutionLog::new();
//! let result = resolver.resolve(&batch, "career", &mut log).unwrap();
//! println!("{}", result.to_report());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod log;
pub mod outcome;
pub mod policy;
pub mod response;
pub mod resolver;
pub mod strategy;
pub mod weights;

// Re-export primary types at crate root for convenience
pub use error::{ConsensusError, ResolveResult};
pub use log::{ResolutionEntry, ResolutionLog};
pub use outcome::ConsensusResult;
pub use policy::{ArbitrationPolicy, ArbitrationRule};
pub use response::{AgentResponse, AgentResponseBuilder, CertaintyLevel};
pub use resolver::{ConsensusResolver, CONFLICT_THRESHOLD, NEUTRAL_SCORE};
pub use strategy::{AgreementLevel, ResolutionStrategy, SavTier};
pub use weights::{WeightTable, DEFAULT_AGENT_WEIGHT};
