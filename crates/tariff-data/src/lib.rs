//! Clearfreight Tariff Data Crate
//!
//! This crate provides authority-agnostic tariff data fetching for the
//! Clearfreight classification engine.
//!
//! # Overview
//!
//! The tariff data crate supports:
//! - Canonical TARIC commodity code normalization (10-digit form)
//! - Multiple tariff authorities: EU TARIC, UK Trade Tariff (GB and XI)
//! - Typed measure records at the upstream boundary
//! - Duty expression parsing (ad valorem, specific, free)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Engine Layer   | --> |   TariffCode     |  (canonical identity)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (TARIC, UK Trade Tariff)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  TariffMeasure   |  (typed rate entry)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`TariffCode`] - Normalized 10-digit commodity code
//! - [`TariffMeasure`] - One rate entry from an authority feed
//! - [`DutyRate`] - Parsed duty expression
//! - [`Region`] - Customs territory served (`eu`, `uk`, `xi`)

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{DutyRate, MeasureType, Region, TariffCode, TariffMeasure, ORIGIN_ALL};

// Re-export provider types
pub use provider::taric::TaricProvider;
pub use provider::uk_tariff::UkTradeTariffProvider;
pub use provider::TariffAuthorityProvider;

// Re-export error types
pub use errors::{RetryClass, TariffDataError};
