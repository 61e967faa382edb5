//! Distribution data types.

use mirath_shared::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::heir::HeirType;

use super::allocation::split_per_head;

/// Share fractions keyed by heir type.
///
/// Backed by a fixed-size per-type array plus an insertion-order list, so
/// emission order is deterministic and the key domain is closed at compile
/// time. Stage transitions never mutate a table in place across stages:
/// [`ShareTable::scaled`] and [`ShareTable::scaled_non_spouse`] return new
/// tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareTable {
    shares: [Decimal; HeirType::COUNT],
    order: Vec<HeirType>,
}

impl ShareTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a share for a heir type.
    ///
    /// First insertion fixes the type's position in emission order; setting
    /// an already-present type overwrites the fraction in place.
    pub fn set(&mut self, heir: HeirType, share: Decimal) {
        if !self.contains(heir) {
            self.order.push(heir);
        }
        self.shares[heir.index()] = share;
    }

    /// The recorded share for a heir type; zero when absent.
    #[must_use]
    pub const fn get(&self, heir: HeirType) -> Decimal {
        self.shares[heir.index()]
    }

    /// True when the type has an entry, even one recorded as zero.
    #[must_use]
    pub fn contains(&self, heir: HeirType) -> bool {
        self.order.contains(&heir)
    }

    /// Sum of all recorded shares.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.order.iter().map(|h| self.shares[h.index()]).sum()
    }

    /// Sum of recorded shares for non-spouse types.
    #[must_use]
    pub fn non_spouse_total(&self) -> Decimal {
        self.order
            .iter()
            .filter(|h| !h.is_spouse())
            .map(|h| self.shares[h.index()])
            .sum()
    }

    /// A new table with every share multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Self {
        let mut scaled = self.clone();
        for heir in &self.order {
            scaled.shares[heir.index()] = self.shares[heir.index()] * factor;
        }
        scaled
    }

    /// A new table with non-spouse shares multiplied by `factor`; spousal
    /// entries keep their value.
    #[must_use]
    pub fn scaled_non_spouse(&self, factor: Decimal) -> Self {
        let mut scaled = self.clone();
        for heir in self.order.iter().filter(|h| !h.is_spouse()) {
            scaled.shares[heir.index()] = self.shares[heir.index()] * factor;
        }
        scaled
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (HeirType, Decimal)> + '_ {
        self.order.iter().map(|h| (*h, self.shares[h.index()]))
    }

    /// The recorded types, in insertion order.
    #[must_use]
    pub fn types(&self) -> &[HeirType] {
        &self.order
    }

    /// True when no type has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// One heir class's slice of the net estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Which heir class this entry covers.
    pub heir: HeirType,
    /// Fraction of the net distributable estate.
    pub share: Decimal,
    /// Monetary amount: `share * net_distributable_estate`.
    pub amount: Decimal,
    /// Number of individuals in this class.
    pub count: u32,
    /// Names declared for the individuals, if any.
    pub names: Option<Vec<String>>,
}

impl Distribution {
    /// Splits the class amount across its individuals.
    ///
    /// Uses largest-remainder allocation so the per-head amounts sum exactly
    /// to the class amount rounded to `decimal_places`, with no unit lost.
    #[must_use]
    pub fn per_head_amounts(&self, decimal_places: u32) -> Vec<Decimal> {
        split_per_head(self.amount, self.count, decimal_places)
    }

    /// The class amount tagged with the jurisdiction's currency, as handed
    /// to the export collaborator.
    #[must_use]
    pub const fn amount_as_money(&self, currency: Currency) -> Money {
        Money::new(self.amount, currency)
    }
}

/// Diagnostics attached to a calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationNote {
    /// A declared heir type has no computation rule in this version and
    /// received no share.
    UnsupportedHeir {
        /// The declared type without a rule.
        heir: HeirType,
    },
    /// No residuary or Radd-eligible heir existed, so this fraction of the
    /// net estate was left unallocated.
    UnallocatedResidue {
        /// Fraction of the net estate left unallocated.
        share: Decimal,
    },
}

/// The complete outcome of one distribution calculation.
///
/// Constructed fresh on every invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The amount actually divided among heirs.
    pub net_distributable_estate: Decimal,
    /// Bequest deducted, after the one-third cap.
    pub wasiyyah_amount: Decimal,
    /// Funeral expenses plus debts deducted before any share computation.
    pub funeral_and_debts: Decimal,
    /// Per-heir-class results, in deterministic emission order.
    pub distributions: Vec<Distribution>,
    /// Fraction of the net estate no rule could allocate (zero normally).
    pub unallocated_share: Decimal,
    /// Diagnostics: unsupported heir types, unallocated residue.
    pub notes: Vec<CalculationNote>,
}

impl CalculationResult {
    /// A result with nothing to distribute.
    #[must_use]
    pub fn empty(wasiyyah_amount: Decimal, funeral_and_debts: Decimal) -> Self {
        Self {
            net_distributable_estate: Decimal::ZERO,
            wasiyyah_amount,
            funeral_and_debts,
            distributions: Vec::new(),
            unallocated_share: Decimal::ZERO,
            notes: Vec::new(),
        }
    }

    /// Sum of all emitted shares.
    #[must_use]
    pub fn total_share(&self) -> Decimal {
        self.distributions.iter().map(|d| d.share).sum()
    }

    /// Sum of all emitted amounts.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.distributions.iter().map(|d| d.amount).sum()
    }
}
