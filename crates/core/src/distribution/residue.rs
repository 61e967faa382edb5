//! Residue (Asabah) allocation and the Radd fallback.

use rust_decimal::Decimal;

use crate::heir::{HeirSet, HeirType};

use super::types::ShareTable;

/// Outcome of the residue stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueOutcome {
    /// Residuary shares by heir type (sons, daughters, father).
    pub residuary: ShareTable,
    /// Fixed shares after any Radd rescaling; otherwise the input table.
    pub fixed: ShareTable,
    /// Residue fraction no rule could allocate (zero normally).
    pub unallocated: Decimal,
}

/// Allocates the residue left after fixed shares.
///
/// Priority order:
///
/// 1. Sons present: residue splits across sons and daughters at 2:1 per
///    head. Daughters then never held a fixed share (the fixed stage only
///    grants one in the absence of sons), so no double-count can occur.
/// 2. Father: takes the entire residue, as sole residuary heir when
///    childless or on top of his sixth when only daughters survive
///    alongside him.
/// 3. Radd: non-spouse fixed shares grow proportionally to absorb the
///    residue. Spouses are excluded; their shares do not increase in the
///    absence of residuary heirs. When no non-spouse fixed share exists the
///    residue is reported as unallocated rather than silently dropped.
#[must_use]
pub fn allocate_residue(heirs: &HeirSet, fixed: ShareTable, residue: Decimal) -> ResidueOutcome {
    let mut residuary = ShareTable::new();

    if residue <= Decimal::ZERO {
        return ResidueOutcome {
            residuary,
            fixed,
            unallocated: Decimal::ZERO,
        };
    }

    let sons = heirs.count(HeirType::Son);
    let daughters = heirs.count(HeirType::Daughter);

    if sons > 0 {
        let parts = Decimal::from(2 * sons + daughters);
        let part_value = residue / parts;
        residuary.set(HeirType::Son, part_value * Decimal::from(2 * sons));
        if daughters > 0 {
            residuary.set(HeirType::Daughter, part_value * Decimal::from(daughters));
        }
        ResidueOutcome {
            residuary,
            fixed,
            unallocated: Decimal::ZERO,
        }
    } else if heirs.contains(HeirType::Father) {
        // Childless father is the sole residuary heir; with only daughters
        // alongside him the residue tops up his sixth.
        residuary.set(HeirType::Father, residue);
        ResidueOutcome {
            residuary,
            fixed,
            unallocated: Decimal::ZERO,
        }
    } else {
        let non_spouse_sum = fixed.non_spouse_total();
        if non_spouse_sum > Decimal::ZERO {
            let radd_factor = (non_spouse_sum + residue) / non_spouse_sum;
            ResidueOutcome {
                residuary,
                fixed: fixed.scaled_non_spouse(radd_factor),
                unallocated: Decimal::ZERO,
            }
        } else {
            ResidueOutcome {
                residuary,
                fixed,
                unallocated: residue,
            }
        }
    }
}
