//! Rate resolution.
//!
//! The resolver owns the cache lifecycle: an in-memory TTL tier backed by
//! the persisted [`MeasureStore`] tier backed by the region's remote
//! authority. No other component reads or writes the cache directly.

mod cache;
mod model;
mod selection;
mod service;
mod store;


pub use cache::{CacheStats, RateCache};
pub use model::{standard_vat_rate, RateOutcome, RateResult, ResolveOptions, VatSource};
pub use selection::{select_measures, SelectedMeasures};
pub use service::RateService;
pub use store::MeasureStore;
