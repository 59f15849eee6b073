//! Landed-cost domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::agreements::TradeAgreement;

use super::incoterms::Incoterm;

/// Input for one landed-cost calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandedCostInput {
    /// Declared customs value of the goods
    pub customs_value: Decimal,
    /// ISO 4217 currency of all monetary fields
    pub currency: String,
    /// Applicable duty rate in percent; zero means duty-free, not unknown
    pub duty_rate_percent: Decimal,
    /// Applicable VAT rate in percent; zero means exempt, not unknown
    pub vat_rate_percent: Decimal,
    /// Trade term the shipment was sold under
    pub incoterm: Incoterm,
    /// Broken-out freight cost, when invoiced separately
    #[serde(default)]
    pub freight_cost: Option<Decimal>,
    /// Broken-out insurance cost, when invoiced separately
    #[serde(default)]
    pub insurance_cost: Option<Decimal>,
    /// Charges incurred after the customs border (D-group terms)
    #[serde(default)]
    pub post_clearance_charges: Option<Decimal>,
    /// Preferential agreement the applied duty rate came from, if any
    #[serde(default)]
    pub applied_agreement: Option<TradeAgreement>,
}

/// The payable breakdown for one shipment.
///
/// Computed value; persistence is the hosting application's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandedCostResult {
    pub customs_value: Decimal,
    /// Duty/VAT taxable base after the Incoterm adjustment
    pub taxable_base: Decimal,
    pub duty_amount: Decimal,
    pub vat_amount: Decimal,
    pub total_payable: Decimal,
    pub applied_duty_rate: Decimal,
    pub applied_vat_rate: Decimal,
    pub currency: String,
    pub incoterm: Incoterm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_agreement: Option<TradeAgreement>,
}
