//! Domain models for tariff data.
//!
//! These types form the fixed schema at the authority boundary: raw feed
//! rows are converted into them by the provider implementations, so the
//! engine never operates on untyped JSON.

mod duty_rate;
mod measure;
mod region;
mod tariff_code;

pub use duty_rate::DutyRate;
pub use measure::{MeasureType, TariffMeasure, ORIGIN_ALL};
pub use region::Region;
pub use tariff_code::{TariffCode, TARIC_CODE_LEN};
