//! Tariff authority provider trait definition.

use async_trait::async_trait;

use crate::errors::TariffDataError;
use crate::models::{Region, TariffCode, TariffMeasure};

/// Trait for tariff authority providers.
///
/// Implement this trait to add support for a new authority feed. The rate
/// resolver selects a provider by the region it serves and treats the
/// returned measures as the authoritative rate source for that territory.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use clearfreight_tariff_data::provider::TariffAuthorityProvider;
///
/// struct MyAuthority;
///
/// #[async_trait]
/// impl TariffAuthorityProvider for MyAuthority {
///     fn id(&self) -> &'static str {
///         "MY_AUTHORITY"
///     }
///
///     fn region(&self) -> Region {
///         Region::Eu
///     }
///
///     // ... implement fetch_measures
/// }
/// ```
#[async_trait]
pub trait TariffAuthorityProvider: Send + Sync {
    /// Unique identifier for this authority.
    ///
    /// Should be a constant string like "TARIC", "UK_TRADE_TARIFF".
    /// Used for logging, error attribution and cache keys.
    fn id(&self) -> &'static str;

    /// The customs territory this provider serves.
    fn region(&self) -> Region;

    /// Whether [`fetch_measures`](Self::fetch_measures) restricts its answer
    /// to measures applicable to the requested origin.
    ///
    /// Origin-filtered feeds let the resolver treat group-area preferences
    /// (GSP, EBA, ...) as qualifying for the requested origin even though
    /// they carry the `ALL` origin sentinel. Defaults to unfiltered.
    fn filters_by_origin(&self) -> bool {
        false
    }

    /// Fetch all measures published against a commodity code.
    ///
    /// # Arguments
    ///
    /// * `code` - Normalized 10-digit commodity code
    /// * `origin_country` - ISO-2 origin the caller is interested in; passed
    ///   to authorities that filter server-side, ignored by those that do not
    ///
    /// # Returns
    ///
    /// Every measure the authority publishes for the code, converted into
    /// typed records. Origin filtering and selection happen in the engine,
    /// not here.
    async fn fetch_measures(
        &self,
        code: &TariffCode,
        origin_country: &str,
    ) -> Result<Vec<TariffMeasure>, TariffDataError>;
}
