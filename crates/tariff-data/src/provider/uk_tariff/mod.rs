//! UK Trade Tariff API provider implementation.
//!
//! Serves both Great Britain (`uk`) and Northern Ireland (`xi`); the XI
//! tariff lives under its own service domain on the same host. Responses
//! are JSON:API documents: measures and their geographical areas, measure
//! types and duty expressions are entries of the `included` array linked
//! by id.

mod models;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;

use crate::errors::TariffDataError;
use crate::models::{DutyRate, MeasureType, Region, TariffCode, TariffMeasure, ORIGIN_ALL};
use crate::provider::TariffAuthorityProvider;

use models::{UkCommodityResponse, UkIncluded};

const BASE_URL: &str = "https://www.trade-tariff.service.gov.uk";
const PROVIDER_ID: &str = "UK_TRADE_TARIFF";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// UK Trade Tariff API provider (GB and XI service domains).
pub struct UkTradeTariffProvider {
    client: Client,
    region: Region,
}

impl UkTradeTariffProvider {
    /// Create a provider for the given service domain.
    ///
    /// `Region::Xi` routes to the Northern Ireland tariff; any other value
    /// routes to the GB tariff.
    pub fn new(region: Region) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, region }
    }

    fn commodity_url(&self, code: &TariffCode) -> String {
        match self.region {
            Region::Xi => format!("{}/xi/api/v2/commodities/{}", BASE_URL, code.as_str()),
            _ => format!("{}/api/v2/commodities/{}", BASE_URL, code.as_str()),
        }
    }
}

/// Classify a measure by its measure-type description.
fn classify_measure_type(description: &str) -> MeasureType {
    let lower = description.to_lowercase();
    if lower.contains("third country") {
        MeasureType::ThirdCountry
    } else if lower.contains("preference") || lower.contains("preferential") {
        MeasureType::Preferential
    } else if lower.contains("anti-dumping") || lower.contains("countervailing") {
        MeasureType::AntiDumping
    } else if lower.contains("value added tax") || lower.starts_with("vat") {
        MeasureType::Vat
    } else {
        MeasureType::Other
    }
}

/// Effective dates arrive as ISO datetimes; only the date part matters.
fn parse_effective_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?;
    let date_part = raw.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn convert_response(code: &TariffCode, response: UkCommodityResponse) -> Vec<TariffMeasure> {
    let mut area_descriptions: HashMap<&str, &str> = HashMap::new();
    let mut measure_type_descriptions: HashMap<&str, &str> = HashMap::new();
    let mut duty_expressions: HashMap<&str, &str> = HashMap::new();

    for entry in &response.included {
        match entry.kind.as_str() {
            "geographical_area" => {
                if let Some(desc) = entry.attributes.description.as_deref() {
                    area_descriptions.insert(entry.id.as_str(), desc);
                }
            }
            "measure_type" => {
                if let Some(desc) = entry.attributes.description.as_deref() {
                    measure_type_descriptions.insert(entry.id.as_str(), desc);
                }
            }
            "duty_expression" => {
                if let Some(base) = entry.attributes.base.as_deref() {
                    duty_expressions.insert(entry.id.as_str(), base);
                }
            }
            _ => {}
        }
    }

    response
        .included
        .iter()
        .filter(|entry| entry.kind == "measure")
        .map(|entry| {
            convert_measure(
                code,
                entry,
                &area_descriptions,
                &measure_type_descriptions,
                &duty_expressions,
            )
        })
        .collect()
}

fn convert_measure(
    code: &TariffCode,
    entry: &UkIncluded,
    area_descriptions: &HashMap<&str, &str>,
    measure_type_descriptions: &HashMap<&str, &str>,
    duty_expressions: &HashMap<&str, &str>,
) -> TariffMeasure {
    let relationships = entry.relationships.as_ref();
    let relation_id = |pick: fn(&models::UkRelationships) -> &Option<models::UkRelation>| {
        relationships
            .and_then(|r| pick(r).as_ref())
            .and_then(|rel| rel.data.as_ref())
            .map(|data| data.id.as_str())
    };

    let area = relation_id(|r| &r.geographical_area)
        .or(entry.attributes.geographical_area_id.as_deref())
        .unwrap_or_default()
        .trim()
        .to_uppercase();
    let origin_country = if area.len() == 2 && area.chars().all(|c| c.is_ascii_alphabetic()) {
        area.clone()
    } else {
        ORIGIN_ALL.to_string()
    };

    let measure_type = relation_id(|r| &r.measure_type)
        .and_then(|id| measure_type_descriptions.get(id))
        .map(|desc| classify_measure_type(desc))
        .unwrap_or(MeasureType::Other);

    let duty_rate = relation_id(|r| &r.duty_expression)
        .and_then(|id| duty_expressions.get(id))
        .map(|base| DutyRate::parse(base))
        .unwrap_or(DutyRate::Free);

    TariffMeasure {
        code: code.clone(),
        origin_country,
        geographical_area_description: area_descriptions.get(area.as_str()).map(|d| d.to_string()),
        geographical_area: area,
        measure_type,
        duty_rate,
        valid_from: parse_effective_date(entry.attributes.effective_start_date.as_deref()),
        valid_to: parse_effective_date(entry.attributes.effective_end_date.as_deref()),
    }
}

#[async_trait]
impl TariffAuthorityProvider for UkTradeTariffProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn region(&self) -> Region {
        self.region
    }

    async fn fetch_measures(
        &self,
        code: &TariffCode,
        _origin_country: &str,
    ) -> Result<Vec<TariffMeasure>, TariffDataError> {
        let url = self.commodity_url(code);
        debug!("Fetching UK Trade Tariff measures for {} ({})", code, self.region);

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

        let body: UkCommodityResponse =
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

    fn sample_response() -> UkCommodityResponse {
        serde_json::from_value(json!({
            "data": { "id": "8471300000", "type": "commodity" },
            "included": [
                {
                    "id": "1011",
                    "type": "geographical_area",
                    "attributes": { "description": "ERGA OMNES" }
                },
                {
                    "id": "JP",
                    "type": "geographical_area",
                    "attributes": { "description": "Japan" }
                },
                {
                    "id": "mt-103",
                    "type": "measure_type",
                    "attributes": { "description": "Third country duty" }
                },
                {
                    "id": "mt-142",
                    "type": "measure_type",
                    "attributes": { "description": "Tariff preference" }
                },
                {
                    "id": "de-1",
                    "type": "duty_expression",
                    "attributes": { "base": "8.00 %" }
                },
                {
                    "id": "de-2",
                    "type": "duty_expression",
                    "attributes": { "base": "Free" }
                },
                {
                    "id": "m-1",
                    "type": "measure",
                    "attributes": {
                        "effective_start_date": "2021-01-01T00:00:00.000Z",
                        "effective_end_date": null
                    },
                    "relationships": {
                        "geographical_area": { "data": { "id": "1011" } },
                        "measure_type": { "data": { "id": "mt-103" } },
                        "duty_expression": { "data": { "id": "de-1" } }
                    }
                },
                {
                    "id": "m-2",
                    "type": "measure",
                    "attributes": {
                        "effective_start_date": "2021-01-01T00:00:00.000Z"
                    },
                    "relationships": {
                        "geographical_area": { "data": { "id": "JP" } },
                        "measure_type": { "data": { "id": "mt-142" } },
                        "duty_expression": { "data": { "id": "de-2" } }
                    }
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_response_builds_measures() {
        let code = TariffCode::normalize("8471300000");
        let measures = convert_response(&code, sample_response());

        assert_eq!(measures.len(), 2);

        assert_eq!(measures[0].measure_type, MeasureType::ThirdCountry);
        assert_eq!(measures[0].origin_country, ORIGIN_ALL);
        assert_eq!(measures[0].geographical_area, "1011");
        assert_eq!(
            measures[0].geographical_area_description.as_deref(),
            Some("ERGA OMNES")
        );
        assert_eq!(
            measures[0].duty_rate.ad_valorem_percent(),
            Some(dec!(8.00))
        );
        assert_eq!(
            measures[0].valid_from,
            Some("2021-01-01".parse().unwrap())
        );

        assert_eq!(measures[1].measure_type, MeasureType::Preferential);
        assert_eq!(measures[1].origin_country, "JP");
        assert!(measures[1].duty_rate.is_free());
    }

    #[test]
    fn test_classify_measure_type() {
        assert_eq!(
            classify_measure_type("Third country duty"),
            MeasureType::ThirdCountry
        );
        assert_eq!(
            classify_measure_type("Tariff preference"),
            MeasureType::Preferential
        );
        assert_eq!(
            classify_measure_type("Definitive anti-dumping duty"),
            MeasureType::AntiDumping
        );
        assert_eq!(
            classify_measure_type("Value added tax"),
            MeasureType::Vat
        );
        assert_eq!(classify_measure_type("Excise"), MeasureType::Other);
    }

    #[test]
    fn test_xi_service_domain_url() {
        let provider = UkTradeTariffProvider::new(Region::Xi);
        let code = TariffCode::normalize("8471300000");
        assert!(provider.commodity_url(&code).contains("/xi/api/v2/"));

        let provider = UkTradeTariffProvider::new(Region::Uk);
        assert!(!provider.commodity_url(&code).contains("/xi/"));
    }
}
