//! Agreement classification rule table and extraction.

use std::collections::HashSet;

use clearfreight_tariff_data::TariffMeasure;

use crate::constants::ERGA_OMNES_AREA;

use super::model::{AgreementType, TradeAgreement};

/// One classification rule: a lowercase pattern matched by substring
/// against the area code and description.
#[derive(Debug, Clone, Copy)]
pub struct AgreementRule {
    pub pattern: &'static str,
    pub agreement_type: AgreementType,
}

/// Ordered classification rules. Evaluated top to bottom, first match wins;
/// "gsp+" must precede "gsp". Patterns cover both TARIC group-area ids and
/// description text so either form of feed classifies.
pub const CLASSIFICATION_RULES: &[AgreementRule] = &[
    AgreementRule {
        pattern: "gsp+",
        agreement_type: AgreementType::GspPlus,
    },
    AgreementRule {
        pattern: "2027",
        agreement_type: AgreementType::GspPlus,
    },
    AgreementRule {
        pattern: "gsp",
        agreement_type: AgreementType::Gsp,
    },
    AgreementRule {
        pattern: "2005",
        agreement_type: AgreementType::Gsp,
    },
    AgreementRule {
        pattern: "2020",
        agreement_type: AgreementType::Gsp,
    },
    AgreementRule {
        pattern: "everything but arms",
        agreement_type: AgreementType::Eba,
    },
    AgreementRule {
        pattern: "2005-eba",
        agreement_type: AgreementType::Eba,
    },
    AgreementRule {
        pattern: "economic partnership",
        agreement_type: AgreementType::Epa,
    },
    AgreementRule {
        pattern: "epa",
        agreement_type: AgreementType::Epa,
    },
    AgreementRule {
        pattern: "free trade",
        agreement_type: AgreementType::Fta,
    },
    AgreementRule {
        pattern: "fta",
        agreement_type: AgreementType::Fta,
    },
    AgreementRule {
        pattern: "customs union",
        agreement_type: AgreementType::CustomsUnion,
    },
];

fn classify(area: &str, description: &str) -> AgreementType {
    let haystack = format!("{} {}", area, description).to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| haystack.contains(rule.pattern))
        .map(|rule| rule.agreement_type)
        .unwrap_or(AgreementType::Other)
}

/// Derive trade agreements from raw measure data.
///
/// Skips the Erga Omnes sentinel area (it applies to all countries, it is
/// not a preference), deduplicates by geographical area with the first
/// occurrence winning, and preserves first-appearance order since callers
/// display in source order. Unrecognized areas come back as
/// [`AgreementType::Other`] with a generated description - never dropped.
pub fn extract_agreements(measures: &[TariffMeasure]) -> Vec<TradeAgreement> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut agreements = Vec::new();

    for measure in measures {
        let area = measure.geographical_area.as_str();
        if area == ERGA_OMNES_AREA {
            continue;
        }
        if let Some(desc) = measure.geographical_area_description.as_deref() {
            if desc.eq_ignore_ascii_case("erga omnes") {
                continue;
            }
        }
        if !seen.insert(area) {
            continue;
        }

        let description = measure.geographical_area_description.as_deref();
        let agreement_type = classify(area, description.unwrap_or_default());
        let description = match (agreement_type, description) {
            (AgreementType::Other, None) => format!("Unclassified agreement area {}", area),
            (AgreementType::Other, Some(desc)) => {
                format!("{} (unclassified area {})", desc, area)
            }
            (_, Some(desc)) => desc.to_string(),
            (_, None) => area.to_string(),
        };

        agreements.push(TradeAgreement {
            agreement_code: area.to_string(),
            agreement_type,
            country_code: measure.origin_country.clone(),
            preferential_rate: measure.duty_rate.clone(),
            description,
            valid_from: measure.valid_from,
            valid_to: measure.valid_to,
        });
    }

    agreements
}
