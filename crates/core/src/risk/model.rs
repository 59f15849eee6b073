//! Risk scoring models and configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Risk classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band a 0-100 score: below 30 low, below 60 medium, else high.
    pub fn from_score(score: Decimal) -> Self {
        if score < dec!(30) {
            RiskLevel::Low
        } else if score < dec!(60) {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// One triggered signal in an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSignal {
    pub name: String,
    pub weight: Decimal,
    pub detail: String,
}

/// The outcome of scoring one resolved classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Sum of triggered signal weights, clamped to 100
    pub score: Decimal,
    pub level: RiskLevel,
    /// The signals that fired, in evaluation order
    pub signals: Vec<RiskSignal>,
}

/// Signal weights and trigger thresholds.
///
/// Defaults carry the sensitive-chapter list (chemicals, explosives,
/// precious metals, base metals, vehicles, arms); the origin watchlist is
/// business policy and defaults empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskConfig {
    pub anti_dumping_weight: Decimal,
    pub high_duty_weight: Decimal,
    /// Ad valorem duty percentage at or above which the duty signal fires
    pub high_duty_threshold: Decimal,
    pub watchlist_weight: Decimal,
    pub origin_watchlist: Vec<String>,
    pub sensitive_chapter_weight: Decimal,
    pub sensitive_chapters: Vec<String>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            anti_dumping_weight: dec!(40),
            high_duty_weight: dec!(25),
            high_duty_threshold: dec!(15),
            watchlist_weight: dec!(20),
            origin_watchlist: Vec::new(),
            sensitive_chapter_weight: dec!(15),
            sensitive_chapters: ["28", "29", "36", "71", "72", "76", "87", "93"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bands() {
        assert_eq!(RiskLevel::from_score(dec!(0)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(dec!(29.9)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(dec!(30)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(dec!(59.9)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(dec!(60)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(dec!(100)), RiskLevel::High);
    }
}
