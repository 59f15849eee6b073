//! Error types and retry classification for the tariff data crate.
//!
//! This module provides:
//! - [`TariffDataError`]: The main error enum for all upstream operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching tariff data from an authority.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method, which determines how the rate
/// resolver should handle the failure.
#[derive(Error, Debug)]
pub enum TariffDataError {
    /// The commodity code is unknown to the authority.
    /// This is a terminal error - retrying won't help.
    #[error("Commodity code not found: {0}")]
    CodeNotFound(String),

    /// The upstream call timed out.
    /// Retried once by the resolver, then surfaced.
    #[error("Upstream timeout: {source_id}")]
    Timeout {
        /// The authority that timed out
        source_id: String,
    },

    /// The authority returned a non-success HTTP status.
    #[error("Upstream error: {source_id} returned HTTP {status}")]
    Upstream {
        /// The authority that returned the error
        source_id: String,
        /// The HTTP status code
        status: u16,
    },

    /// The authority rate limited the request (HTTP 429).
    #[error("Rate limited: {source_id}")]
    RateLimited {
        /// The authority that rate limited the request
        source_id: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to parse response from {source_id}: {message}")]
    Parse {
        /// The authority whose response failed to decode
        source_id: String,
        /// Description of the decode failure
        message: String,
    },

    /// A network error occurred while communicating with an authority.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TariffDataError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::Never`]: the error is terminal, surface it
    /// - [`RetryClass::Once`]: retry the call a single time, then surface
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::CodeNotFound(_) | Self::Parse { .. } | Self::Upstream { .. } => RetryClass::Never,
            Self::Timeout { .. } | Self::RateLimited { .. } => RetryClass::Once,
            Self::Network(e) if e.is_timeout() => RetryClass::Once,
            Self::Network(_) => RetryClass::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_not_found_never_retries() {
        let error = TariffDataError::CodeNotFound("8471000000".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_timeout_retries_once() {
        let error = TariffDataError::Timeout {
            source_id: "TARIC".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Once);
    }

    #[test]
    fn test_rate_limited_retries_once() {
        let error = TariffDataError::RateLimited {
            source_id: "UK_TRADE_TARIFF".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Once);
    }

    #[test]
    fn test_upstream_status_never_retries() {
        let error = TariffDataError::Upstream {
            source_id: "TARIC".to_string(),
            status: 502,
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_parse_never_retries() {
        let error = TariffDataError::Parse {
            source_id: "UK_TRADE_TARIFF".to_string(),
            message: "unexpected token".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_error_display() {
        let error = TariffDataError::Upstream {
            source_id: "TARIC".to_string(),
            status: 503,
        };
        assert_eq!(
            format!("{}", error),
            "Upstream error: TARIC returned HTTP 503"
        );

        let error = TariffDataError::CodeNotFound("0101000000".to_string());
        assert_eq!(format!("{}", error), "Commodity code not found: 0101000000");
    }
}
