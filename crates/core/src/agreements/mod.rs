//! Trade agreement derivation.
//!
//! Agreements are not stored as a source of truth: they are recomputed on
//! each classification request from the raw measures an authority returned,
//! by classifying geographical-area codes against an ordered rule table.

mod matcher;
mod model;

pub use matcher::{extract_agreements, AgreementRule, CLASSIFICATION_RULES};
pub use model::{AgreementType, TradeAgreement};
