//! Weighted-signal risk scorer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::rates::RateResult;

use super::model::{RiskAssessment, RiskConfig, RiskLevel, RiskSignal};

/// Scores resolved classifications against the configured signals.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: RiskConfig,
}

impl RiskScorer {
    /// Scorer with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with caller-supplied weights and lists.
    pub fn with_config(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Assess one resolved rate. Signals are evaluated in a fixed order
    /// and every triggered one is reported with its weight.
    pub fn assess(&self, rate: &RateResult) -> RiskAssessment {
        let mut signals = Vec::new();

        if let Some(anti_dumping) = &rate.anti_dumping {
            signals.push(RiskSignal {
                name: "anti_dumping".to_string(),
                weight: self.config.anti_dumping_weight,
                detail: format!(
                    "anti-dumping duty {} applies to origin {}",
                    anti_dumping, rate.origin_country
                ),
            });
        }

        if let Some(percent) = rate.duty_rate.ad_valorem_percent() {
            if percent >= self.config.high_duty_threshold {
                signals.push(RiskSignal {
                    name: "high_duty".to_string(),
                    weight: self.config.high_duty_weight,
                    detail: format!(
                        "duty rate {}% at or above threshold {}%",
                        percent, self.config.high_duty_threshold
                    ),
                });
            }
        }

        if self
            .config
            .origin_watchlist
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&rate.origin_country))
        {
            signals.push(RiskSignal {
                name: "watchlist_origin".to_string(),
                weight: self.config.watchlist_weight,
                detail: format!("origin {} is watch-listed", rate.origin_country),
            });
        }

        let chapter = rate.code.chapter();
        if self
            .config
            .sensitive_chapters
            .iter()
            .any(|c| c == chapter)
        {
            signals.push(RiskSignal {
                name: "sensitive_chapter".to_string(),
                weight: self.config.sensitive_chapter_weight,
                detail: format!("HS chapter {} is sensitive", chapter),
            });
        }

        let score = signals
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc + s.weight)
            .min(dec!(100));

        RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
            signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{standard_vat_rate, VatSource};
    use chrono::Utc;
    use clearfreight_tariff_data::{DutyRate, MeasureType, Region, TariffCode};

    fn rate(code: &str, origin: &str, duty: &str, anti_dumping: Option<&str>) -> RateResult {
        RateResult {
            code: TariffCode::normalize(code),
            origin_country: origin.to_string(),
            region: Region::Uk,
            duty_rate: DutyRate::parse(duty),
            measure_type: MeasureType::ThirdCountry,
            vat_rate: standard_vat_rate(Region::Uk),
            vat_source: VatSource::RegionDefault,
            anti_dumping: anti_dumping.map(DutyRate::parse),
            agreements: Vec::new(),
            applied_agreement: None,
            source: "MOCK".to_string(),
            resolved_at: Utc::now(),
        }
    }

    #[test]
    fn test_clean_rate_scores_low() {
        let assessment = RiskScorer::new().assess(&rate("8471300000", "JP", "2.5 %", None));
        assert_eq!(assessment.score, Decimal::ZERO);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert!(assessment.signals.is_empty());
    }

    #[test]
    fn test_anti_dumping_dominates() {
        let assessment = RiskScorer::new().assess(&rate("8471300000", "CN", "2.5 %", Some("48.5 %")));
        assert_eq!(assessment.score, dec!(40));
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert_eq!(assessment.signals.len(), 1);
        assert_eq!(assessment.signals[0].name, "anti_dumping");
    }

    #[test]
    fn test_signals_accumulate() {
        // Chapter 72 (base metals), high duty, anti-dumping
        let assessment = RiskScorer::new().assess(&rate("7208510000", "CN", "25 %", Some("48.5 %")));
        assert_eq!(assessment.score, dec!(80));
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.signals.len(), 3);
    }

    #[test]
    fn test_watchlist_origin() {
        let config = RiskConfig {
            origin_watchlist: vec!["KP".to_string()],
            ..RiskConfig::default()
        };
        let assessment = RiskScorer::with_config(config).assess(&rate("8471300000", "kp", "0 %", None));
        assert_eq!(assessment.signals.len(), 1);
        assert_eq!(assessment.signals[0].name, "watchlist_origin");
    }

    #[test]
    fn test_score_clamped_to_100() {
        let config = RiskConfig {
            anti_dumping_weight: dec!(90),
            high_duty_weight: dec!(90),
            ..RiskConfig::default()
        };
        let assessment =
            RiskScorer::with_config(config).assess(&rate("8471300000", "CN", "25 %", Some("48.5 %")));
        assert_eq!(assessment.score, dec!(100));
    }
}
