//! Most-specific-measure selection.

use chrono::NaiveDate;

use clearfreight_tariff_data::{MeasureType, TariffMeasure, ORIGIN_ALL};

/// The measures the resolver acts on for one lookup.
#[derive(Debug)]
pub struct SelectedMeasures<'a> {
    /// The operative duty measure (third-country or preferential)
    pub duty: &'a TariffMeasure,
    /// The VAT measure, when the feed carries one
    pub vat: Option<&'a TariffMeasure>,
    /// Anti-dumping duty stacking on top, when applicable
    pub anti_dumping: Option<&'a TariffMeasure>,
}

/// Specificity of a duty measure for tie-breaking, higher wins.
///
/// Exact origin beats [`ORIGIN_ALL`], an active validity window beats an
/// expired one, and an active preferential measure beats third-country when
/// the origin qualifies. Group-area preferences (GSP, EBA, ...) carry the
/// [`ORIGIN_ALL`] sentinel, so they qualify only when the feed was already
/// filtered to the requested origin. Ties keep the first occurrence.
fn specificity(
    measure: &TariffMeasure,
    origin_country: &str,
    on: NaiveDate,
    origin_filtered: bool,
) -> (bool, bool, bool) {
    let exact = measure.origin_country.eq_ignore_ascii_case(origin_country)
        && measure.origin_country != ORIGIN_ALL;
    let active = measure.is_active(on);
    let preferential_eligible = measure.measure_type == MeasureType::Preferential
        && active
        && (exact || origin_filtered);
    (exact, active, preferential_eligible)
}

fn most_specific<'a>(
    candidates: impl Iterator<Item = &'a TariffMeasure>,
    origin_country: &str,
    on: NaiveDate,
    origin_filtered: bool,
) -> Option<&'a TariffMeasure> {
    let mut best: Option<(&'a TariffMeasure, (bool, bool, bool))> = None;
    for measure in candidates {
        let score = specificity(measure, origin_country, on, origin_filtered);
        match &best {
            // Strictly greater keeps the first occurrence on ties
            Some((_, best_score)) if score <= *best_score => {}
            _ => best = Some((measure, score)),
        }
    }
    best.map(|(measure, _)| measure)
}

/// Pick the operative measures for an origin from everything the
/// authority returned. `None` when no duty measure applies at all.
///
/// `origin_filtered` says whether the feed already restricted its answer to
/// the requested origin; see [`specificity`] for how that affects
/// group-area preferences.
pub fn select_measures<'a>(
    measures: &'a [TariffMeasure],
    origin_country: &str,
    on: NaiveDate,
    origin_filtered: bool,
) -> Option<SelectedMeasures<'a>> {
    let duty = most_specific(
        measures.iter().filter(|m| {
            m.applies_to_origin(origin_country)
                && matches!(
                    m.measure_type,
                    MeasureType::ThirdCountry | MeasureType::Preferential
                )
        }),
        origin_country,
        on,
        origin_filtered,
    )?;

    let vat = measures
        .iter()
        .find(|m| m.measure_type == MeasureType::Vat && m.is_active(on));

    let anti_dumping = most_specific(
        measures.iter().filter(|m| {
            m.measure_type == MeasureType::AntiDumping
                && m.applies_to_origin(origin_country)
                && m.is_active(on)
        }),
        origin_country,
        on,
        origin_filtered,
    );

    Some(SelectedMeasures {
        duty,
        vat,
        anti_dumping,
    })
}
