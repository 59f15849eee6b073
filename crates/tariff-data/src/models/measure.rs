//! Tariff measure records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::duty_rate::DutyRate;
use super::tariff_code::TariffCode;

/// Origin sentinel for measures that apply to every country.
pub const ORIGIN_ALL: &str = "ALL";

/// The kind of measure an authority publishes against a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasureType {
    /// Default duty applicable absent any preference
    ThirdCountry,
    /// Reduced rate under a trade agreement
    Preferential,
    /// Additional duty on dumped goods from specific origins
    AntiDumping,
    /// Import VAT measure
    Vat,
    /// Any measure kind the engine does not act on (excise, quotas, ...)
    Other,
}

/// One rate entry from an authority feed.
///
/// Multiple measures may apply to the same code; the resolver picks the
/// most specific applicable one (exact origin beats [`ORIGIN_ALL`],
/// in-validity beats expired, preferential beats third-country when the
/// origin qualifies).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffMeasure {
    /// Commodity code the measure is published against
    pub code: TariffCode,
    /// ISO-2 origin country, or [`ORIGIN_ALL`] for group/erga-omnes areas
    pub origin_country: String,
    /// Authority geographical area id (country or group)
    pub geographical_area: String,
    /// Human-readable area description, when the feed carries one
    pub geographical_area_description: Option<String>,
    /// Measure kind
    pub measure_type: MeasureType,
    /// Parsed duty expression
    pub duty_rate: DutyRate,
    /// Start of validity, when bounded
    pub valid_from: Option<NaiveDate>,
    /// End of validity, when bounded
    pub valid_to: Option<NaiveDate>,
}

impl TariffMeasure {
    /// Whether the measure is within its validity window on `date`.
    ///
    /// Unbounded ends are treated as open: a measure with no dates at all
    /// is always active.
    pub fn is_active(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.valid_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.valid_to {
            if date > to {
                return false;
            }
        }
        true
    }

    /// Whether the measure applies to goods from `origin_country`.
    ///
    /// Exact ISO-2 match or the [`ORIGIN_ALL`] sentinel.
    pub fn applies_to_origin(&self, origin_country: &str) -> bool {
        self.origin_country == ORIGIN_ALL
            || self.origin_country.eq_ignore_ascii_case(origin_country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(origin: &str, from: Option<&str>, to: Option<&str>) -> TariffMeasure {
        TariffMeasure {
            code: TariffCode::normalize("8471300000"),
            origin_country: origin.to_string(),
            geographical_area: origin.to_string(),
            geographical_area_description: None,
            measure_type: MeasureType::ThirdCountry,
            duty_rate: DutyRate::Free,
            valid_from: from.map(|d| d.parse().unwrap()),
            valid_to: to.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn test_is_active_window() {
        let m = measure("ALL", Some("2024-01-01"), Some("2024-12-31"));
        assert!(m.is_active("2024-06-15".parse().unwrap()));
        assert!(!m.is_active("2023-12-31".parse().unwrap()));
        assert!(!m.is_active("2025-01-01".parse().unwrap()));
    }

    #[test]
    fn test_unbounded_is_always_active() {
        let m = measure("ALL", None, None);
        assert!(m.is_active("1990-01-01".parse().unwrap()));
    }

    #[test]
    fn test_applies_to_origin() {
        let m = measure("CN", None, None);
        assert!(m.applies_to_origin("CN"));
        assert!(m.applies_to_origin("cn"));
        assert!(!m.applies_to_origin("JP"));
        assert!(measure("ALL", None, None).applies_to_origin("JP"));
    }
}
