//! EU TARIC realtime provider implementation.
//!
//! Queries the TARIC consultation endpoint for the measures published
//! against a goods code. TARIC returns every measure for the code; origin
//! filtering happens engine-side.
//!
//! Measure type ids follow the TARIC nomenclature: 103 is the third-country
//! duty, the 14x range are tariff preferences, the 55x range are
//! anti-dumping/countervailing duties and 305 is import VAT.

mod models;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::errors::TariffDataError;
use crate::models::{DutyRate, MeasureType, Region, TariffCode, TariffMeasure, ORIGIN_ALL};
use crate::provider::TariffAuthorityProvider;

use models::{TaricMeasureRow, TaricMeasuresResponse};

const BASE_URL: &str = "https://ec.europa.eu/taxation_customs/dds2/taric/rest/goods";
const PROVIDER_ID: &str = "TARIC";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// EU TARIC realtime tariff provider.
pub struct TaricProvider {
    client: Client,
}

impl TaricProvider {
    /// Create a new TARIC provider.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Create a TARIC provider with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for TaricProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert one TARIC measure row into a typed record.
///
/// Two-letter area ids are origin countries; numeric ids are group areas
/// (erga omnes, GSP, ...) which apply to all origins.
fn convert_row(code: &TariffCode, row: &TaricMeasureRow) -> TariffMeasure {
    let area = row.geographical_area.id.trim().to_uppercase();
    let origin_country = if area.len() == 2 && area.chars().all(|c| c.is_ascii_alphabetic()) {
        area.clone()
    } else {
        ORIGIN_ALL.to_string()
    };

    let measure_type = match row.measure_type.id.as_str() {
        "103" | "105" => MeasureType::ThirdCountry,
        "142" | "143" | "145" | "146" => MeasureType::Preferential,
        "551" | "552" | "553" | "554" => MeasureType::AntiDumping,
        "305" => MeasureType::Vat,
        _ => MeasureType::Other,
    };

    TariffMeasure {
        code: code.clone(),
        origin_country,
        geographical_area: area,
        geographical_area_description: row.geographical_area.description.clone(),
        measure_type,
        duty_rate: DutyRate::parse(row.duty_expression.as_deref().unwrap_or_default()),
        valid_from: parse_date(row.start_date.as_deref()),
        valid_to: parse_date(row.end_date.as_deref()),
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}

fn convert_response(code: &TariffCode, response: TaricMeasuresResponse) -> Vec<TariffMeasure> {
    response
        .measures
        .iter()
        .map(|row| convert_row(code, row))
        .collect()
}

#[async_trait]
impl TariffAuthorityProvider for TaricProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn region(&self) -> Region {
        Region::Eu
    }

    // The measures endpoint takes the origin as a query parameter, so the
    // response is already restricted to the requested origin.
    fn filters_by_origin(&self) -> bool {
        true
    }

    async fn fetch_measures(
        &self,
        code: &TariffCode,
        origin_country: &str,
    ) -> Result<Vec<TariffMeasure>, TariffDataError> {
        let url = format!(
            "{}/{}/measures?origin={}&lang=en",
            BASE_URL,
            code.as_str(),
            origin_country
        );
        debug!("Fetching TARIC measures for {}", code);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                TariffDataError::Timeout {
                    source_id: PROVIDER_ID.to_string(),
                }
            } else {
                TariffDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(TariffDataError::CodeNotFound(code.as_str().to_string()));
        }
        if status.as_u16() == 429 {
            return Err(TariffDataError::RateLimited {
                source_id: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(TariffDataError::Upstream {
                source_id: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body: TaricMeasuresResponse =
            response.json().await.map_err(|e| TariffDataError::Parse {
                source_id: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        Ok(convert_response(code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample_response() -> TaricMeasuresResponse {
        serde_json::from_value(json!({
            "measures": [
                {
                    "measureType": { "id": "103", "description": "Third country duty" },
                    "geographicalArea": { "id": "1011", "description": "ERGA OMNES" },
                    "dutyExpression": "2.50 %",
                    "startDate": "2021-01-01",
                    "endDate": null
                },
                {
                    "measureType": { "id": "142", "description": "Tariff preference" },
                    "geographicalArea": { "id": "TR", "description": "Turkey" },
                    "dutyExpression": "Free",
                    "startDate": "2021-01-01"
                },
                {
                    "measureType": { "id": "552", "description": "Definitive anti-dumping duty" },
                    "geographicalArea": { "id": "CN", "description": "China" },
                    "dutyExpression": "48.50 %"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_response_measure_types() {
        let code = TariffCode::normalize("8471300000");
        let measures = convert_response(&code, sample_response());

        assert_eq!(measures.len(), 3);
        assert_eq!(measures[0].measure_type, MeasureType::ThirdCountry);
        assert_eq!(measures[1].measure_type, MeasureType::Preferential);
        assert_eq!(measures[2].measure_type, MeasureType::AntiDumping);
    }

    #[test]
    fn test_group_area_maps_to_all_origins() {
        let code = TariffCode::normalize("8471300000");
        let measures = convert_response(&code, sample_response());

        assert_eq!(measures[0].origin_country, ORIGIN_ALL);
        assert_eq!(measures[0].geographical_area, "1011");
        assert_eq!(measures[1].origin_country, "TR");
        assert_eq!(measures[2].origin_country, "CN");
    }

    #[test]
    fn test_duty_expressions_parsed() {
        let code = TariffCode::normalize("8471300000");
        let measures = convert_response(&code, sample_response());

        assert_eq!(
            measures[0].duty_rate.ad_valorem_percent(),
            Some(dec!(2.50))
        );
        assert!(measures[1].duty_rate.is_free());
        assert_eq!(
            measures[2].duty_rate.ad_valorem_percent(),
            Some(dec!(48.50))
        );
    }

    #[test]
    fn test_reports_origin_filtered_feed() {
        assert!(TaricProvider::new().filters_by_origin());
    }

    #[test]
    fn test_validity_dates_parsed() {
        let code = TariffCode::normalize("8471300000");
        let measures = convert_response(&code, sample_response());

        assert_eq!(
            measures[0].valid_from,
            Some("2021-01-01".parse().unwrap())
        );
        assert_eq!(measures[0].valid_to, None);
    }
}
