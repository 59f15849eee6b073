//! Core error types for the classification engine.
//!
//! Upstream failures keep their typed form from the tariff data crate;
//! storage failures arrive in string form so the engine stays
//! storage-agnostic. A missing rate is NOT an error - the resolver
//! returns it as a normal outcome variant.

use thiserror::Error;

use clearfreight_tariff_data::TariffDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the classification engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Tariff data operation failed: {0}")]
    TariffData(#[from] TariffDataError),

    #[error("Measure store error: {0}")]
    Store(String),

    /// Cache population failed. Non-fatal: the computation that triggered
    /// the write still returns its result.
    #[error("Cache write failed: {0}")]
    CacheWrite(String),
}

/// Validation errors for caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
