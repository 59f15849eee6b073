//! Rate resolution service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use log::{debug, warn};

use clearfreight_tariff_data::{
    Region, RetryClass, TariffAuthorityProvider, TariffCode, TariffDataError, TariffMeasure,
};

use crate::agreements::extract_agreements;
use crate::constants::DEFAULT_MAX_IN_FLIGHT;
use crate::errors::{Error, Result};

use super::cache::{CacheStats, RateCache};
use super::model::{standard_vat_rate, RateOutcome, RateResult, ResolveOptions, VatSource};
use super::selection::select_measures;
use super::store::MeasureStore;

/// Resolves duty and VAT rates through a layered cache.
///
/// Tier order, first hit wins: in-memory TTL cache, persisted store
/// (when `prefer_cache`), remote authority. Remote hits are written
/// through to the memory tier always and the store tier when `persist`.
/// The service owns the cache; no other component touches it.
pub struct RateService {
    providers: HashMap<Region, Arc<dyn TariffAuthorityProvider>>,
    store: Arc<dyn MeasureStore>,
    cache: RateCache,
    max_in_flight: usize,
}

impl RateService {
    /// Build a service over the given authorities and store.
    ///
    /// When several providers claim the same region the last one wins.
    pub fn new(
        providers: Vec<Arc<dyn TariffAuthorityProvider>>,
        store: Arc<dyn MeasureStore>,
    ) -> Self {
        let providers = providers
            .into_iter()
            .map(|p| (p.region(), p))
            .collect();
        Self {
            providers,
            store,
            cache: RateCache::new(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Replace the cache (mainly to shorten the TTL under test).
    pub fn with_cache(mut self, cache: RateCache) -> Self {
        self.cache = cache;
        self
    }

    /// Cap on concurrent upstream calls during batch resolution.
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Resolve the operative rates for one code.
    ///
    /// An empty code and an all-tier miss both come back as
    /// [`RateOutcome::NotFound`]; only upstream failures are errors.
    pub async fn resolve(
        &self,
        code: &TariffCode,
        origin_country: &str,
        region: Region,
        opts: &ResolveOptions,
    ) -> Result<RateOutcome> {
        if code.is_empty() {
            return Ok(RateOutcome::NotFound);
        }

        let provider = match self.providers.get(&region) {
            Some(provider) => provider,
            None => {
                warn!("No tariff authority configured for region {}", region);
                return Ok(RateOutcome::NotFound);
            }
        };
        let source_id = provider.id();
        let origin_filtered = provider.filters_by_origin();

        // Tier 1: memory
        if let Some(hit) = self.cache.get(code, origin_country, region, source_id) {
            debug!("Rate cache hit for {} ({}, {})", code, origin_country, region);
            return Ok(RateOutcome::Found(Box::new(hit)));
        }

        // Tier 2: persisted store
        if opts.prefer_cache {
            match self
                .store
                .load_cached_measures(code, origin_country, region)
                .await
            {
                Ok(measures) if !measures.is_empty() => {
                    if let Some(result) = build_rate_result(
                        code,
                        origin_country,
                        region,
                        source_id,
                        origin_filtered,
                        &measures,
                    ) {
                        self.cache
                            .insert(code, origin_country, region, source_id, result.clone());
                        return Ok(RateOutcome::Found(Box::new(result)));
                    }
                    // Stored measures exist but none applies; fall through
                    // to the authority for a fresh answer.
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Measure store read failed for {}: {}", code, e);
                }
            }
        }

        // Tier 3: remote authority
        let measures = match self
            .fetch_with_retry(provider.as_ref(), code, origin_country)
            .await?
        {
            Some(measures) => measures,
            None => return Ok(RateOutcome::NotFound),
        };

        let result = match build_rate_result(
            code,
            origin_country,
            region,
            source_id,
            origin_filtered,
            &measures,
        ) {
            Some(result) => result,
            None => return Ok(RateOutcome::NotFound),
        };

        self.cache
            .insert(code, origin_country, region, source_id, result.clone());
        if opts.persist {
            if let Err(e) = self.persist_measures(region, &measures).await {
                // Cache population is an optimization; the resolution
                // still returns its result.
                warn!("{} (code {})", e, code);
            }
        }

        Ok(RateOutcome::Found(Box::new(result)))
    }

    /// Resolve a batch of codes with bounded upstream concurrency.
    ///
    /// Per-item success/failure: one timed-out code never blocks the
    /// others, and the map reports each code's own outcome.
    pub async fn resolve_batch(
        &self,
        codes: &[String],
        origin_country: &str,
        region: Region,
    ) -> HashMap<String, Result<RateOutcome>> {
        let opts = ResolveOptions::default();
        stream::iter(codes.iter().map(|raw| {
            let code = TariffCode::normalize(raw);
            let opts = opts;
            async move {
                let outcome = self.resolve(&code, origin_country, region, &opts).await;
                (code.as_str().to_string(), outcome)
            }
        }))
        .buffer_unordered(self.max_in_flight)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect()
    }

    /// Drop every cached rate.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Cache statistics for operational visibility.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// One upstream call, retried a single time for retryable failures.
    /// `Ok(None)` means the authority does not know the code.
    async fn fetch_with_retry(
        &self,
        provider: &dyn TariffAuthorityProvider,
        code: &TariffCode,
        origin_country: &str,
    ) -> Result<Option<Vec<TariffMeasure>>> {
        match provider.fetch_measures(code, origin_country).await {
            Ok(measures) => Ok(Some(measures)),
            Err(TariffDataError::CodeNotFound(_)) => Ok(None),
            Err(e) if e.retry_class() == RetryClass::Once => {
                warn!("Upstream call for {} failed ({}), retrying once", code, e);
                match provider.fetch_measures(code, origin_country).await {
                    Ok(measures) => Ok(Some(measures)),
                    Err(TariffDataError::CodeNotFound(_)) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write measures through to the store tier. Failures surface as
    /// [`Error::CacheWrite`]; the caller logs them and keeps its result.
    async fn persist_measures(&self, region: Region, measures: &[TariffMeasure]) -> Result<()> {
        self.store
            .save_measures(region, measures)
            .await
            .map_err(|e| Error::CacheWrite(e.to_string()))
    }
}

/// Select the operative measures and assemble the rate result.
/// `None` when nothing applies to the origin.
fn build_rate_result(
    code: &TariffCode,
    origin_country: &str,
    region: Region,
    source_id: &str,
    origin_filtered: bool,
    measures: &[TariffMeasure],
) -> Option<RateResult> {
    let today = Utc::now().date_naive();
    let selected = select_measures(measures, origin_country, today, origin_filtered)?;
    let agreements = extract_agreements(measures);

    let applied_agreement = if selected.duty.measure_type
        == clearfreight_tariff_data::MeasureType::Preferential
    {
        agreements
            .iter()
            .find(|a| a.agreement_code == selected.duty.geographical_area)
            .cloned()
    } else {
        None
    };

    let (vat_rate, vat_source) = match selected
        .vat
        .and_then(|m| m.duty_rate.ad_valorem_percent())
    {
        Some(rate) => (rate, VatSource::Measure),
        None => (standard_vat_rate(region), VatSource::RegionDefault),
    };

    Some(RateResult {
        code: code.clone(),
        origin_country: origin_country.to_uppercase(),
        region,
        duty_rate: selected.duty.duty_rate.clone(),
        measure_type: selected.duty.measure_type,
        vat_rate,
        vat_source,
        anti_dumping: selected.anti_dumping.map(|m| m.duty_rate.clone()),
        agreements,
        applied_agreement,
        source: source_id.to_string(),
        resolved_at: Utc::now(),
    })
}
