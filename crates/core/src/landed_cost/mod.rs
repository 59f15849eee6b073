//! Landed-cost calculation.
//!
//! A pure function of its inputs plus resolved rates: no persisted state,
//! safely parallelizable across requests. Incoterm handling is driven by a
//! pluggable valuation table because trade-term interpretation is the most
//! change-prone rule in the system.

mod calculator;
mod incoterms;
mod model;

pub use calculator::LandedCostCalculator;
pub use incoterms::{Incoterm, IncotermGroup, ValuationAdjustment, ValuationTable};
pub use model::{LandedCostInput, LandedCostResult};
