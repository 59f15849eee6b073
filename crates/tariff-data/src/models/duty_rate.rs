//! Parsed duty expressions.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A duty rate as expressed by an authority feed.
///
/// Feeds carry rates as free-text duty expressions: ad valorem percentages
/// ("12.00 %"), specific amounts per unit ("35.10 EUR / 100 kg"), or the
/// literal "Free". Expressions that fit neither shape are preserved verbatim
/// inside [`Specific`](Self::Specific) rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DutyRate {
    /// No duty payable.
    Free,
    /// Percentage of the customs value.
    AdValorem {
        /// Rate in percent (e.g. 12.5 for "12.50 %")
        percent: Decimal,
    },
    /// Fixed amount per quantity unit.
    Specific {
        /// Amount per unit; zero when the expression could not be parsed
        amount: Decimal,
        /// Unit description, or the raw expression for unparseable input
        unit: String,
    },
}

impl DutyRate {
    /// Parse a duty expression from an authority feed.
    ///
    /// Tolerant by design: anything that is not recognisably ad valorem or
    /// "Free" comes back as [`Specific`](Self::Specific) carrying the raw
    /// text, so no expression is lost between feed and engine.
    pub fn parse(expression: &str) -> Self {
        let text = expression.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("free") {
            return Self::Free;
        }

        if let Some(percent_part) = text.strip_suffix('%').map(str::trim).or_else(|| {
            text.find('%')
                .map(|idx| text[..idx].trim())
                .filter(|p| !p.is_empty())
        }) {
            if let Ok(percent) = Decimal::from_str(percent_part) {
                return Self::AdValorem { percent };
            }
        }

        // "35.10 EUR / 100 kg" style: leading amount, remainder is the unit.
        let mut parts = text.splitn(2, char::is_whitespace);
        if let (Some(first), Some(rest)) = (parts.next(), parts.next()) {
            if let Ok(amount) = Decimal::from_str(first) {
                return Self::Specific {
                    amount,
                    unit: rest.trim().to_string(),
                };
            }
        }

        Self::Specific {
            amount: Decimal::ZERO,
            unit: text.to_string(),
        }
    }

    /// The ad valorem percentage, when this rate has one.
    ///
    /// `Free` counts as zero percent; specific duties have no percentage.
    pub fn ad_valorem_percent(&self) -> Option<Decimal> {
        match self {
            Self::Free => Some(Decimal::ZERO),
            Self::AdValorem { percent } => Some(*percent),
            Self::Specific { .. } => None,
        }
    }

    /// True when no duty is payable under this rate.
    pub fn is_free(&self) -> bool {
        match self {
            Self::Free => true,
            Self::AdValorem { percent } => percent.is_zero(),
            Self::Specific { .. } => false,
        }
    }
}

impl fmt::Display for DutyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::AdValorem { percent } => write!(f, "{}%", percent),
            Self::Specific { amount, unit } => write!(f, "{} {}", amount, unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_ad_valorem() {
        assert_eq!(
            DutyRate::parse("12.00 %"),
            DutyRate::AdValorem { percent: dec!(12.00) }
        );
        assert_eq!(
            DutyRate::parse("4%"),
            DutyRate::AdValorem { percent: dec!(4) }
        );
    }

    #[test]
    fn test_parse_free() {
        assert_eq!(DutyRate::parse("Free"), DutyRate::Free);
        assert_eq!(DutyRate::parse(""), DutyRate::Free);
        assert!(DutyRate::parse("0.00 %").is_free());
    }

    #[test]
    fn test_parse_specific() {
        assert_eq!(
            DutyRate::parse("35.10 EUR / 100 kg"),
            DutyRate::Specific {
                amount: dec!(35.10),
                unit: "EUR / 100 kg".to_string(),
            }
        );
    }

    #[test]
    fn test_unparseable_expression_preserved() {
        let rate = DutyRate::parse("see footnote TM510");
        assert_eq!(
            rate,
            DutyRate::Specific {
                amount: Decimal::ZERO,
                unit: "see footnote TM510".to_string(),
            }
        );
    }

    #[test]
    fn test_ad_valorem_percent() {
        assert_eq!(DutyRate::Free.ad_valorem_percent(), Some(Decimal::ZERO));
        assert_eq!(
            DutyRate::parse("8.5 %").ad_valorem_percent(),
            Some(dec!(8.5))
        );
        assert_eq!(
            DutyRate::parse("35.10 EUR / 100 kg").ad_valorem_percent(),
            None
        );
    }
}
