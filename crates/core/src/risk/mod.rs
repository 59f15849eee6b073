//! Compliance risk scoring.
//!
//! Scores a resolved classification across several weighted signals
//! (anti-dumping exposure, duty level, origin watchlist, sensitive HS
//! chapters). Weights are configuration, not branches, so the scoring
//! policy can be tuned without touching the scorer.

mod model;
mod scorer;

pub use model::{RiskAssessment, RiskConfig, RiskLevel, RiskSignal};
pub use scorer::RiskScorer;
