//! Clearfreight Core - Tariff classification and landed-cost engine.
//!
//! This crate contains the business logic of the classification engine.
//! It is storage-agnostic: persistence happens behind the
//! [`MeasureStore`](rates::MeasureStore) trait, implemented by the hosting
//! application.
//!
//! The engine is assembled from four cooperating parts. A caller supplies a
//! commodity code, an origin country, a customs value and an Incoterm; the
//! code is normalized, the [`RateService`](rates::RateService) resolves the
//! operative duty and VAT rates through its cache tiers, the agreement
//! matcher annotates preferential eligibility, and the
//! [`LandedCostCalculator`](landed_cost::LandedCostCalculator) produces the
//! payable breakdown.

pub mod agreements;
pub mod classification;
pub mod constants;
pub mod errors;
pub mod landed_cost;
pub mod rates;
pub mod risk;
pub mod utils;

// Re-export the boundary types from the tariff data crate
pub use clearfreight_tariff_data::{
    DutyRate, MeasureType, Region, TariffAuthorityProvider, TariffCode, TariffDataError,
    TariffMeasure,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
