//! Landed-cost calculator.

use rust_decimal::Decimal;

use crate::constants::MONETARY_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::utils::rounding::round_to_decimal;

use super::incoterms::ValuationTable;
use super::model::{LandedCostInput, LandedCostResult};

/// Combines customs value, duty rate, VAT rate and ancillary costs into the
/// payable breakdown.
///
/// Stateless apart from its valuation table; one instance can serve
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct LandedCostCalculator {
    table: ValuationTable,
}

impl LandedCostCalculator {
    /// Calculator with the standard valuation table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with a caller-supplied valuation table.
    pub fn with_table(table: ValuationTable) -> Self {
        Self { table }
    }

    /// Compute the duty/VAT/total payable for one shipment.
    ///
    /// Rejects invalid input before any computation: negative amounts and
    /// negative rates are caller errors. Zero rates are valid (duty-free /
    /// VAT-exempt). VAT is charged on the duty-inclusive value per the
    /// standard EU/UK customs rule, with half-up rounding at each step.
    pub fn calculate(&self, input: &LandedCostInput) -> Result<LandedCostResult> {
        validate(input)?;

        let adjustment = self.table.adjustment(input.incoterm);
        let freight = input.freight_cost.unwrap_or(Decimal::ZERO);
        let insurance = input.insurance_cost.unwrap_or(Decimal::ZERO);
        let post_clearance = input.post_clearance_charges.unwrap_or(Decimal::ZERO);

        let mut base = input.customs_value;
        if adjustment.add_freight {
            base += freight;
        }
        if adjustment.add_insurance {
            base += insurance;
        }
        if adjustment.deduct_post_clearance {
            if post_clearance > base {
                return Err(ValidationError::InvalidInput(format!(
                    "post-clearance charges {} exceed customs value {}",
                    post_clearance, base
                ))
                .into());
            }
            base -= post_clearance;
        }

        let hundred = Decimal::ONE_HUNDRED;
        let duty_amount = round_to_decimal(
            base * input.duty_rate_percent / hundred,
            MONETARY_PRECISION,
        );
        let vat_base = base + duty_amount;
        let vat_amount = round_to_decimal(
            vat_base * input.vat_rate_percent / hundred,
            MONETARY_PRECISION,
        );
        let total_payable = round_to_decimal(duty_amount + vat_amount, MONETARY_PRECISION);

        Ok(LandedCostResult {
            customs_value: input.customs_value,
            taxable_base: base,
            duty_amount,
            vat_amount,
            total_payable,
            applied_duty_rate: input.duty_rate_percent,
            applied_vat_rate: input.vat_rate_percent,
            currency: input.currency.clone(),
            incoterm: input.incoterm,
            applied_agreement: input.applied_agreement.clone(),
        })
    }
}

fn validate(input: &LandedCostInput) -> Result<()> {
    let non_negative = [
        ("customsValue", Some(input.customs_value)),
        ("freightCost", input.freight_cost),
        ("insuranceCost", input.insurance_cost),
        ("postClearanceCharges", input.post_clearance_charges),
        ("dutyRatePercent", Some(input.duty_rate_percent)),
        ("vatRatePercent", Some(input.vat_rate_percent)),
    ];
    for (field, value) in non_negative {
        if let Some(value) = value {
            if value < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "{} must not be negative, got {}",
                    field, value
                ))
                .into());
            }
        }
    }
    if input.currency.trim().is_empty() {
        return Err(ValidationError::MissingField("currency".to_string()).into());
    }
    Ok(())
}
