//! Customs territory selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The customs territory a lookup is resolved against.
///
/// Determines which authority serves the request: `eu` goes to the TARIC
/// realtime endpoint, `uk` and `xi` (Northern Ireland) to the UK Trade
/// Tariff API under their respective service domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// European Union (TARIC)
    Eu,
    /// Great Britain (UK Trade Tariff)
    Uk,
    /// Northern Ireland (UK Trade Tariff, XI service domain)
    Xi,
}

impl Region {
    /// Returns the string identifier for this region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Uk => "uk",
            Region::Xi => "xi",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eu" => Ok(Region::Eu),
            "uk" | "gb" => Ok(Region::Uk),
            "xi" => Ok(Region::Xi),
            other => Err(format!("Unknown region: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region() {
        assert_eq!("eu".parse::<Region>(), Ok(Region::Eu));
        assert_eq!("UK".parse::<Region>(), Ok(Region::Uk));
        assert_eq!("gb".parse::<Region>(), Ok(Region::Uk));
        assert_eq!("xi".parse::<Region>(), Ok(Region::Xi));
        assert!("fr".parse::<Region>().is_err());
    }

    #[test]
    fn test_round_trip() {
        for region in [Region::Eu, Region::Uk, Region::Xi] {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
        }
    }
}
