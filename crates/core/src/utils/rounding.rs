//! Shared monetary rounding.
//!
//! Customs amounts are rounded half-up at every computation step, not only
//! at the end, to match regulatory rounding conventions. Every monetary
//! rounding in the engine goes through [`round_to_decimal`] so the policy
//! lives in exactly one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `dp` decimal places, half-up.
pub fn round_to_decimal(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_to_decimal(dec!(1.005), 2), dec!(1.01));
        assert_eq!(round_to_decimal(dec!(1.004), 2), dec!(1.00));
        assert_eq!(round_to_decimal(dec!(235.195), 2), dec!(235.20));
    }

    #[test]
    fn test_already_rounded_unchanged() {
        assert_eq!(round_to_decimal(dec!(56.00), 2), dec!(56.00));
    }
}
