//! Measure persistence trait.
//!
//! The engine does not define a storage engine; the hosting application
//! implements this trait (SQL, document store, whatever it runs on) and
//! the resolver uses it as its second cache tier. Store failures are
//! logged and never fail a resolution - persistence is an optimization,
//! not a correctness requirement.

use async_trait::async_trait;

use clearfreight_tariff_data::{Region, TariffCode, TariffMeasure};

use crate::errors::Result;

/// Storage interface for previously fetched measures.
#[async_trait]
pub trait MeasureStore: Send + Sync {
    /// Persist one measure for later lookups.
    async fn save_measure(&self, region: Region, measure: &TariffMeasure) -> Result<()>;

    /// Persist a batch of measures. Default implementation saves one at a
    /// time; implementations with batch upserts should override.
    async fn save_measures(&self, region: Region, measures: &[TariffMeasure]) -> Result<()> {
        for measure in measures {
            self.save_measure(region, measure).await?;
        }
        Ok(())
    }

    /// Previously saved measures for a lookup key.
    ///
    /// Returns every stored measure for the code in the region that names
    /// the origin or applies to all origins; an empty vector is a miss.
    async fn load_cached_measures(
        &self,
        code: &TariffCode,
        origin_country: &str,
        region: Region,
    ) -> Result<Vec<TariffMeasure>>;
}
