//! In-memory TTL cache for resolved rates.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use clearfreight_tariff_data::{Region, TariffCode};

use crate::constants::CACHE_TTL_HOURS;

use super::model::RateResult;

/// Operational cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub valid_count: usize,
    pub expired_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    result: RateResult,
    expires_at: DateTime<Utc>,
}

/// TTL cache keyed by (code, origin, region, source).
///
/// Reads are lock-free map lookups. Concurrent writers racing to populate
/// the same key is acceptable: the data is idempotent, last writer wins,
/// and serializing writes would only cost throughput. At most one entry
/// exists per key.
#[derive(Debug)]
pub struct RateCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl RateCache {
    /// Cache with the default 24 hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(CACHE_TTL_HOURS))
    }

    /// Cache with a caller-supplied TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    fn key(code: &TariffCode, origin_country: &str, region: Region, source_id: &str) -> String {
        format!(
            "{}|{}|{}|{}",
            code.as_str(),
            origin_country.to_uppercase(),
            region,
            source_id
        )
    }

    /// A non-expired cached result for the key, if present.
    pub fn get(
        &self,
        code: &TariffCode,
        origin_country: &str,
        region: Region,
        source_id: &str,
    ) -> Option<RateResult> {
        let key = Self::key(code, origin_country, region, source_id);
        let entry = self.entries.get(&key)?;
        if Utc::now() < entry.expires_at {
            Some(entry.result.clone())
        } else {
            None
        }
    }

    /// Cache a result under its key, replacing any previous entry.
    pub fn insert(
        &self,
        code: &TariffCode,
        origin_country: &str,
        region: Region,
        source_id: &str,
        result: RateResult,
    ) {
        let key = Self::key(code, origin_country, region, source_id);
        self.entries.insert(
            key,
            CacheEntry {
                result,
                expires_at: Utc::now() + self.ttl,
            },
        );
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Count valid and expired entries for operational visibility.
    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let mut valid_count = 0;
        let mut expired_count = 0;
        for entry in self.entries.iter() {
            if now < entry.expires_at {
                valid_count += 1;
            } else {
                expired_count += 1;
            }
        }
        CacheStats {
            valid_count,
            expired_count,
            total_count: valid_count + expired_count,
        }
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
