//! Fixed (Qur'anic) share assignment and Awal abatement.

use rust_decimal::Decimal;

use crate::heir::{HeirSet, HeirType};

use super::types::ShareTable;

/// An exact decimal fraction `num / den`.
///
/// Repeating fractions (1/3, 1/6, 2/3) resolve to `Decimal`'s full 28-digit
/// precision; downstream sums compare against an epsilon where that matters.
fn fraction(num: u32, den: u32) -> Decimal {
    Decimal::from(num) / Decimal::from(den)
}

/// Assigns the fixed shares for the declared heirs.
///
/// Branching follows the simplified rule set:
///
/// - husband: 1/4 with children, else 1/2; otherwise wife: 1/8 with
///   children, else 1/4 (one pooled share for all wives)
/// - father: 1/6 with children; recorded as zero without children, since he
///   then inherits as residuary instead
/// - mother: 1/6 with children, else 1/3 (assumes no surviving siblings;
///   the vocabulary has no sibling type)
/// - daughters with no sons: 1/2 for one, 2/3 for two or more
///
/// Sons never take a fixed share; they are handled as residuary heirs.
/// Insertion order here fixes the emission order of the final result.
#[must_use]
pub fn fixed_shares(heirs: &HeirSet) -> ShareTable {
    let mut table = ShareTable::new();
    let has_children = heirs.has_children();

    if heirs.contains(HeirType::Husband) {
        let share = if has_children {
            fraction(1, 4)
        } else {
            fraction(1, 2)
        };
        table.set(HeirType::Husband, share);
    } else if heirs.contains(HeirType::Wife) {
        let share = if has_children {
            fraction(1, 8)
        } else {
            fraction(1, 4)
        };
        table.set(HeirType::Wife, share);
    }

    if heirs.contains(HeirType::Father) {
        let share = if has_children {
            fraction(1, 6)
        } else {
            Decimal::ZERO
        };
        table.set(HeirType::Father, share);
    }

    if heirs.contains(HeirType::Mother) {
        let share = if has_children {
            fraction(1, 6)
        } else {
            fraction(1, 3)
        };
        table.set(HeirType::Mother, share);
    }

    if !heirs.contains(HeirType::Son) && heirs.contains(HeirType::Daughter) {
        let share = if heirs.count(HeirType::Daughter) == 1 {
            fraction(1, 2)
        } else {
            fraction(2, 3)
        };
        table.set(HeirType::Daughter, share);
    }

    table
}

/// Applies Awal: proportional abatement when fixed shares over-subscribe.
///
/// When the fixed-share total exceeds 1, every share is scaled by
/// `1 / total` so entitlements reduce proportionally rather than being paid
/// in declaration order. Returns the (possibly new) table together with its
/// total, clamped to exactly 1 in the abatement branch so the residue stage
/// sees no rounding dust.
#[must_use]
pub fn apply_awal(table: ShareTable) -> (ShareTable, Decimal) {
    let total = table.total();
    if total > Decimal::ONE {
        (table.scaled(Decimal::ONE / total), Decimal::ONE)
    } else {
        (table, total)
    }
}
