//! Trade agreement domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clearfreight_tariff_data::DutyRate;

/// Known trade agreement families.
///
/// Classification is by substring match against the geographical-area code
/// and description; anything unrecognized lands in `Other` rather than
/// being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgreementType {
    /// Generalised Scheme of Preferences
    Gsp,
    /// GSP enhanced arrangement (GSP+)
    GspPlus,
    /// Everything But Arms
    Eba,
    /// Economic Partnership Agreement
    Epa,
    /// Free Trade Agreement
    Fta,
    /// Customs union (e.g. EU-Turkey)
    CustomsUnion,
    /// Unrecognized agreement area, preserved for display
    Other,
}

impl AgreementType {
    /// Returns the string identifier for this agreement family.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementType::Gsp => "GSP",
            AgreementType::GspPlus => "GSP_PLUS",
            AgreementType::Eba => "EBA",
            AgreementType::Epa => "EPA",
            AgreementType::Fta => "FTA",
            AgreementType::CustomsUnion => "CUSTOMS_UNION",
            AgreementType::Other => "OTHER",
        }
    }
}

/// A preferential-rate eligibility derived from raw measure data.
///
/// Derived, not persisted as authoritative: recomputed on each
/// classification request (a cached copy may ride along inside a cached
/// rate result).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeAgreement {
    /// Geographical-area code the agreement was derived from
    pub agreement_code: String,
    /// Classified agreement family
    pub agreement_type: AgreementType,
    /// Origin country the deriving measure names, or "ALL" for group areas
    pub country_code: String,
    /// Preferential duty rate from the deriving measure
    pub preferential_rate: DutyRate,
    /// Display description (feed description, or generated for `Other`)
    pub description: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
}
