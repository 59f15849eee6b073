//! Response structures for the TARIC realtime endpoint.

use serde::Deserialize;

/// Top-level measures response for one goods code.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaricMeasuresResponse {
    #[serde(default)]
    pub measures: Vec<TaricMeasureRow>,
}

/// One measure row in the TARIC response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaricMeasureRow {
    pub measure_type: TaricMeasureType,
    pub geographical_area: TaricGeographicalArea,
    #[serde(default)]
    pub duty_expression: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaricMeasureType {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaricGeographicalArea {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
}
