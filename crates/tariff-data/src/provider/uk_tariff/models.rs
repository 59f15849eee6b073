//! Response structures for the UK Trade Tariff API (JSON:API format).
//!
//! Measures, geographical areas, measure types and duty expressions all
//! arrive as entries in the `included` array, cross-referenced by id
//! through `relationships`.

use serde::Deserialize;

/// Top-level commodity response.
#[derive(Debug, Deserialize)]
pub struct UkCommodityResponse {
    #[serde(default)]
    pub included: Vec<UkIncluded>,
}

/// One entry in the JSON:API `included` array.
#[derive(Debug, Deserialize)]
pub struct UkIncluded {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: UkAttributes,
    #[serde(default)]
    pub relationships: Option<UkRelationships>,
}

/// Attribute superset across the entry kinds the engine reads.
#[derive(Debug, Default, Deserialize)]
pub struct UkAttributes {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub geographical_area_id: Option<String>,
    #[serde(default)]
    pub effective_start_date: Option<String>,
    #[serde(default)]
    pub effective_end_date: Option<String>,
    /// Duty expression base, e.g. "8.00 %" (duty_expression entries)
    #[serde(default)]
    pub base: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UkRelationships {
    #[serde(default)]
    pub geographical_area: Option<UkRelation>,
    #[serde(default)]
    pub measure_type: Option<UkRelation>,
    #[serde(default)]
    pub duty_expression: Option<UkRelation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UkRelation {
    #[serde(default)]
    pub data: Option<UkRelationData>,
}

#[derive(Debug, Deserialize)]
pub struct UkRelationData {
    pub id: String,
}
