/// In-memory rate cache time-to-live, in hours
pub const CACHE_TTL_HOURS: i64 = 24;

/// Default cap on in-flight upstream calls during batch resolution
pub const DEFAULT_MAX_IN_FLIGHT: usize = 5;

/// Decimal precision for monetary amounts
pub const MONETARY_PRECISION: u32 = 2;

/// TARIC geographical area id for "toward all countries"
pub const ERGA_OMNES_AREA: &str = "1011";
