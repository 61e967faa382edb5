//! The distribution engine: orchestration and result assembly.

use rust_decimal::Decimal;

use crate::estate::{EstateInput, NetEstate};
use crate::heir::{HeirSet, HeirType};

use super::residue::allocate_residue;
use super::shares::{apply_awal, fixed_shares};
use super::types::{CalculationNote, CalculationResult, Distribution, ShareTable};

/// Engine for computing a Fara'id distribution.
///
/// A stateless, synchronous, total function over its inputs: every call
/// returns a fresh result, degenerate inputs degrade to an empty
/// distribution, and identical inputs produce identical results.
pub struct DistributionEngine;

impl DistributionEngine {
    /// Runs the full calculation for one estate and one set of heirs.
    ///
    /// Stages, in fixed order: deduct liabilities, cap and deduct the
    /// bequest, assign fixed shares, abate proportionally (Awal), allocate
    /// the residue (Asabah or Radd), then assemble per-class entries.
    #[must_use]
    pub fn compute(input: &EstateInput, heirs: &HeirSet) -> CalculationResult {
        let net = NetEstate::compute(input);

        if net.net_distributable <= Decimal::ZERO {
            // Nothing to divide; liabilities and bequest figures still
            // carry through for display.
            return CalculationResult::empty(net.wasiyyah_amount, net.funeral_and_debts);
        }

        let (fixed, total_fixed) = apply_awal(fixed_shares(heirs));
        let residue = Decimal::ONE - total_fixed;
        let outcome = allocate_residue(heirs, fixed, residue);

        let distributions =
            assemble(&outcome.fixed, &outcome.residuary, heirs, net.net_distributable);

        let mut notes: Vec<CalculationNote> = heirs
            .declared()
            .iter()
            .filter(|h| !h.has_share_rule())
            .map(|h| CalculationNote::UnsupportedHeir { heir: *h })
            .collect();
        if outcome.unallocated > Decimal::ZERO {
            notes.push(CalculationNote::UnallocatedResidue {
                share: outcome.unallocated,
            });
        }

        CalculationResult {
            net_distributable_estate: net.net_distributable,
            wasiyyah_amount: net.wasiyyah_amount,
            funeral_and_debts: net.funeral_and_debts,
            distributions,
            unallocated_share: outcome.unallocated,
            notes,
        }
    }
}

/// Merges the fixed and residuary tables into ordered distribution entries.
///
/// Fixed-share types come first in their insertion order, then residuary
/// only types; a type present in both tables is merged once at its first
/// position. Entries whose combined share is not positive are omitted.
fn assemble(
    fixed: &ShareTable,
    residuary: &ShareTable,
    heirs: &HeirSet,
    net_distributable: Decimal,
) -> Vec<Distribution> {
    let mut distributions = Vec::new();

    let mut push = |heir: HeirType| {
        let share = fixed.get(heir) + residuary.get(heir);
        if share > Decimal::ZERO {
            distributions.push(Distribution {
                heir,
                share,
                amount: share * net_distributable,
                count: heirs.count(heir).max(1),
                names: heirs.names(heir).map(<[String]>::to_vec),
            });
        }
    };

    for heir in fixed.types() {
        push(*heir);
    }
    for heir in residuary.types() {
        if !fixed.contains(*heir) {
            push(*heir);
        }
    }

    distributions
}
