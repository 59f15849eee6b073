//! Incoterms and the customs-valuation adjustment table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Standardized trade terms, grouped E/F/C/D by who arranges main carriage.
///
/// DDU predates Incoterms 2010 but still appears on legacy contracts, so
/// the engine accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    Exw,
    Fca,
    Fas,
    Fob,
    Cfr,
    Cif,
    Cpt,
    Cip,
    Dap,
    Dpu,
    Ddp,
    Ddu,
}

/// Incoterm group by main-carriage responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncotermGroup {
    /// EXW, FCA, FAS, FOB - buyer bears main carriage
    EF,
    /// CFR, CIF, CPT, CIP - seller pays carriage to destination port
    C,
    /// DAP, DPU, DDP, DDU - deliverable at destination
    D,
}

impl Incoterm {
    pub const ALL: [Incoterm; 12] = [
        Incoterm::Exw,
        Incoterm::Fca,
        Incoterm::Fas,
        Incoterm::Fob,
        Incoterm::Cfr,
        Incoterm::Cif,
        Incoterm::Cpt,
        Incoterm::Cip,
        Incoterm::Dap,
        Incoterm::Dpu,
        Incoterm::Ddp,
        Incoterm::Ddu,
    ];

    /// Returns the three-letter code for this term.
    pub fn as_str(&self) -> &'static str {
        match self {
            Incoterm::Exw => "EXW",
            Incoterm::Fca => "FCA",
            Incoterm::Fas => "FAS",
            Incoterm::Fob => "FOB",
            Incoterm::Cfr => "CFR",
            Incoterm::Cif => "CIF",
            Incoterm::Cpt => "CPT",
            Incoterm::Cip => "CIP",
            Incoterm::Dap => "DAP",
            Incoterm::Dpu => "DPU",
            Incoterm::Ddp => "DDP",
            Incoterm::Ddu => "DDU",
        }
    }

    /// The E/F/C/D group of this term.
    pub fn group(&self) -> IncotermGroup {
        match self {
            Incoterm::Exw | Incoterm::Fca | Incoterm::Fas | Incoterm::Fob => IncotermGroup::EF,
            Incoterm::Cfr | Incoterm::Cif | Incoterm::Cpt | Incoterm::Cip => IncotermGroup::C,
            Incoterm::Dap | Incoterm::Dpu | Incoterm::Ddp | Incoterm::Ddu => IncotermGroup::D,
        }
    }
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Incoterm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Incoterm::ALL
            .iter()
            .find(|term| term.as_str() == upper)
            .copied()
            .ok_or_else(|| ValidationError::InvalidInput(format!("Unknown Incoterm: {}", s)))
    }
}

/// How one Incoterm adjusts the customs-valuation base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationAdjustment {
    /// Add the broken-out freight cost to the base
    pub add_freight: bool,
    /// Add the broken-out insurance cost to the base
    pub add_insurance: bool,
    /// Deduct charges incurred after the customs border
    pub deduct_post_clearance: bool,
}

/// Per-Incoterm valuation adjustments, as data rather than branches.
///
/// [`ValuationTable::standard`] encodes the default customs-valuation
/// practice; callers with a confirmed different business rule swap the
/// table (or individual entries) instead of patching the calculator.
#[derive(Debug, Clone)]
pub struct ValuationTable {
    adjustments: HashMap<Incoterm, ValuationAdjustment>,
}

impl ValuationTable {
    /// The standard adjustment table.
    ///
    /// - E/F terms: buyer bears main carriage, so freight and insurance are
    ///   added back for customs valuation.
    /// - C terms: value already includes carriage to the destination port.
    ///   CFR and CPT exclude insurance, so separately broken-out insurance
    ///   is added; CIF and CIP already include it.
    /// - D terms: deliverable at destination; charges incurred after the
    ///   customs border are deducted.
    pub fn standard() -> Self {
        let mut adjustments = HashMap::new();
        for term in [Incoterm::Exw, Incoterm::Fca, Incoterm::Fas, Incoterm::Fob] {
            adjustments.insert(
                term,
                ValuationAdjustment {
                    add_freight: true,
                    add_insurance: true,
                    deduct_post_clearance: false,
                },
            );
        }
        for term in [Incoterm::Cfr, Incoterm::Cpt] {
            adjustments.insert(
                term,
                ValuationAdjustment {
                    add_freight: false,
                    add_insurance: true,
                    deduct_post_clearance: false,
                },
            );
        }
        for term in [Incoterm::Cif, Incoterm::Cip] {
            adjustments.insert(term, ValuationAdjustment::default());
        }
        for term in [Incoterm::Dap, Incoterm::Dpu, Incoterm::Ddp, Incoterm::Ddu] {
            adjustments.insert(
                term,
                ValuationAdjustment {
                    add_freight: false,
                    add_insurance: false,
                    deduct_post_clearance: true,
                },
            );
        }
        Self { adjustments }
    }

    /// The adjustment for a term; unknown entries adjust nothing.
    pub fn adjustment(&self, term: Incoterm) -> ValuationAdjustment {
        self.adjustments.get(&term).copied().unwrap_or_default()
    }

    /// Override the adjustment for one term.
    pub fn set(&mut self, term: Incoterm, adjustment: ValuationAdjustment) {
        self.adjustments.insert(term, adjustment);
    }
}

impl Default for ValuationTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_incoterm() {
        assert_eq!("FOB".parse::<Incoterm>().unwrap(), Incoterm::Fob);
        assert_eq!("cif".parse::<Incoterm>().unwrap(), Incoterm::Cif);
        assert!("XYZ".parse::<Incoterm>().is_err());
    }

    #[test]
    fn test_groups() {
        assert_eq!(Incoterm::Fob.group(), IncotermGroup::EF);
        assert_eq!(Incoterm::Cif.group(), IncotermGroup::C);
        assert_eq!(Incoterm::Ddp.group(), IncotermGroup::D);
    }

    #[test]
    fn test_standard_table_ef_adds_both() {
        let table = ValuationTable::standard();
        let adj = table.adjustment(Incoterm::Fob);
        assert!(adj.add_freight);
        assert!(adj.add_insurance);
        assert!(!adj.deduct_post_clearance);
    }

    #[test]
    fn test_standard_table_c_group_insurance_split() {
        let table = ValuationTable::standard();
        assert!(table.adjustment(Incoterm::Cfr).add_insurance);
        assert!(table.adjustment(Incoterm::Cpt).add_insurance);
        assert!(!table.adjustment(Incoterm::Cif).add_insurance);
        assert!(!table.adjustment(Incoterm::Cip).add_insurance);
        assert!(!table.adjustment(Incoterm::Cfr).add_freight);
    }

    #[test]
    fn test_table_is_overridable() {
        let mut table = ValuationTable::standard();
        table.set(
            Incoterm::Cfr,
            ValuationAdjustment {
                add_freight: false,
                add_insurance: false,
                deduct_post_clearance: false,
            },
        );
        assert!(!table.adjustment(Incoterm::Cfr).add_insurance);
    }
}
