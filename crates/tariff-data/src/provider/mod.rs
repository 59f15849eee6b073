//! Tariff authority provider implementations.
//!
//! Each submodule is one remote authority. Providers share the
//! [`TariffAuthorityProvider`] trait and convert feed-specific response
//! shapes into [`TariffMeasure`](crate::models::TariffMeasure) records.

pub mod taric;
mod traits;
pub mod uk_tariff;

pub use traits::TariffAuthorityProvider;
