//! Longest-prefix matching over known commodity codes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use clearfreight_tariff_data::TariffCode;

/// Prefix lengths that correspond to HS hierarchy levels, most specific
/// first: full code, CN subheading, HS subheading, heading, chapter.
const HIERARCHY_PREFIX_LENGTHS: [usize; 5] = [10, 8, 6, 4, 2];

/// A recommendation from the prefix index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HsMatch {
    /// The known code that shares the longest hierarchy prefix
    pub code: TariffCode,
    /// Number of leading digits shared with the query
    pub matched_digits: usize,
}

/// Ordered set of known commodity codes with hierarchical prefix lookup.
///
/// The digit-ordered set makes every HS subtree a contiguous range, so
/// prefix enumeration is a range scan rather than a full iteration.
#[derive(Debug, Clone, Default)]
pub struct HsPrefixIndex {
    codes: BTreeSet<String>,
}

impl HsPrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a known code. Empty codes are ignored.
    pub fn insert(&mut self, code: &TariffCode) {
        if !code.is_empty() {
            self.codes.insert(code.as_str().to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All indexed codes starting with the given digit prefix, in order.
    pub fn candidates(&self, prefix: &str) -> Vec<TariffCode> {
        let digits: String = prefix.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Vec::new();
        }
        self.codes
            .range(digits.clone()..)
            .take_while(|code| code.starts_with(&digits))
            .map(|code| TariffCode::normalize(code))
            .collect()
    }

    /// The known code sharing the longest hierarchy prefix with `code`.
    ///
    /// Walks the HS levels from most to least specific; within a level the
    /// lowest code wins (stable recommendation for equal specificity).
    pub fn best_match(&self, code: &TariffCode) -> Option<HsMatch> {
        if code.is_empty() {
            return None;
        }
        for len in HIERARCHY_PREFIX_LENGTHS {
            let prefix = &code.as_str()[..len.min(code.as_str().len())];
            if let Some(found) = self.candidates(prefix).into_iter().next() {
                return Some(HsMatch {
                    code: found,
                    matched_digits: len,
                });
            }
        }
        None
    }
}

impl FromIterator<TariffCode> for HsPrefixIndex {
    fn from_iter<I: IntoIterator<Item = TariffCode>>(iter: I) -> Self {
        let mut index = Self::new();
        for code in iter {
            index.insert(&code);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(codes: &[&str]) -> HsPrefixIndex {
        codes.iter().map(|c| TariffCode::normalize(c)).collect()
    }

    #[test]
    fn test_exact_match_wins() {
        let idx = index(&["8471300000", "8471410000"]);
        let m = idx.best_match(&TariffCode::normalize("8471300000")).unwrap();
        assert_eq!(m.code.as_str(), "8471300000");
        assert_eq!(m.matched_digits, 10);
    }

    #[test]
    fn test_falls_back_to_heading() {
        let idx = index(&["8471410000"]);
        let m = idx.best_match(&TariffCode::normalize("8471300000")).unwrap();
        assert_eq!(m.code.as_str(), "8471410000");
        assert_eq!(m.matched_digits, 4);
    }

    #[test]
    fn test_falls_back_to_chapter() {
        let idx = index(&["8473909500"]);
        let m = idx.best_match(&TariffCode::normalize("8471300000")).unwrap();
        assert_eq!(m.matched_digits, 2);
    }

    #[test]
    fn test_no_shared_prefix_is_none() {
        let idx = index(&["0101210000"]);
        assert!(idx.best_match(&TariffCode::normalize("8471300000")).is_none());
    }

    #[test]
    fn test_candidates_are_ordered_range() {
        let idx = index(&["8471300000", "8471410000", "8473909500", "0101210000"]);
        let candidates = idx.candidates("8471");
        let codes: Vec<&str> = candidates.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["8471300000", "8471410000"]);
    }

    #[test]
    fn test_empty_code_ignored() {
        let mut idx = HsPrefixIndex::new();
        idx.insert(&TariffCode::normalize(""));
        assert!(idx.is_empty());
        assert!(idx.best_match(&TariffCode::normalize("")).is_none());
    }
}
