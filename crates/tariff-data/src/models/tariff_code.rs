//! Canonical commodity code identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical width of a TARIC commodity code.
pub const TARIC_CODE_LEN: usize = 10;

/// A normalized 10-digit HS/TARIC commodity code.
///
/// Invariant: once normalized the code is exactly ten numeric characters.
/// Shorter codes are right-padded with zeros, longer codes truncated.
/// The one exception is the empty code: blank input passes through
/// unchanged so callers can distinguish "nothing to normalize" from a
/// malformed code. Use [`is_empty`](Self::is_empty) to detect it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TariffCode(String);

impl TariffCode {
    /// Normalize a raw code string into canonical 10-digit form.
    ///
    /// Strips every non-digit character, then truncates to the first ten
    /// digits or right-pads with `'0'` to reach ten. Pure and idempotent;
    /// never fails.
    pub fn normalize(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self(raw.to_string());
        }

        let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.truncate(TARIC_CODE_LEN);
        while digits.len() < TARIC_CODE_LEN {
            digits.push('0');
        }
        Self(digits)
    }

    /// The canonical code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the code carries no digits (the permissive "no code" sentinel).
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// HS chapter: the first two digits.
    pub fn chapter(&self) -> &str {
        self.prefix(2)
    }

    /// HS heading: the first four digits.
    pub fn heading(&self) -> &str {
        self.prefix(4)
    }

    /// HS subheading: the first six digits.
    pub fn subheading(&self) -> &str {
        self.prefix(6)
    }

    fn prefix(&self, len: usize) -> &str {
        if self.0.len() >= len {
            &self.0[..len]
        } else {
            &self.0
        }
    }
}

impl fmt::Display for TariffCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TariffCode> for String {
    fn from(code: TariffCode) -> Self {
        code.0
    }
}
