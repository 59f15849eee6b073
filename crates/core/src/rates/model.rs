//! Rate resolution domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use clearfreight_tariff_data::{DutyRate, MeasureType, Region, TariffCode};

use crate::agreements::TradeAgreement;

/// Where the applied VAT rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VatSource {
    /// A VAT measure in the authority response
    Measure,
    /// The region's standard import VAT rate (no VAT measure returned)
    RegionDefault,
}

/// The operative rates for one (code, origin, region) lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResult {
    pub code: TariffCode,
    pub origin_country: String,
    pub region: Region,
    /// The selected duty measure's rate
    pub duty_rate: DutyRate,
    /// Kind of the selected duty measure
    pub measure_type: MeasureType,
    pub vat_rate: Decimal,
    pub vat_source: VatSource,
    /// Anti-dumping duty stacking on top of the selected rate, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anti_dumping: Option<DutyRate>,
    /// Every agreement derivable from the returned measures, source order
    pub agreements: Vec<TradeAgreement>,
    /// The agreement the selected rate came from, when preferential
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_agreement: Option<TradeAgreement>,
    /// Authority the measures were fetched from
    pub source: String,
    pub resolved_at: DateTime<Utc>,
}

/// Resolution outcome. A missing rate is a normal result, not an error -
/// callers decide whether it is fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum RateOutcome {
    Found(Box<RateResult>),
    NotFound,
}

impl RateOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RateOutcome::Found(_))
    }

    /// The rate result, when one was found.
    pub fn found(&self) -> Option<&RateResult> {
        match self {
            RateOutcome::Found(result) => Some(result),
            RateOutcome::NotFound => None,
        }
    }
}

/// Per-call resolution options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Consult the persisted store tier before going remote
    pub prefer_cache: bool,
    /// Write remote results through to the persisted store
    pub persist: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            prefer_cache: true,
            persist: true,
        }
    }
}

/// Standard import VAT rate for a region, used when the authority response
/// carries no VAT measure. TARIC cannot know the destination member state,
/// so the EU default is zero and callers supply the member-state rate.
pub fn standard_vat_rate(region: Region) -> Decimal {
    match region {
        Region::Uk | Region::Xi => dec!(20),
        Region::Eu => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ResolveOptions::default();
        assert!(opts.prefer_cache);
        assert!(opts.persist);
    }

    #[test]
    fn test_standard_vat_rate() {
        assert_eq!(standard_vat_rate(Region::Uk), dec!(20));
        assert_eq!(standard_vat_rate(Region::Xi), dec!(20));
        assert_eq!(standard_vat_rate(Region::Eu), Decimal::ZERO);
    }
}
