//! Net-estate deductions: liabilities and the capped bequest.

use mirath_shared::parse_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Explicit, immutable input figures for one calculation.
///
/// All fields are expected to be non-negative; text-field parsing upstream
/// defaults unparseable input to zero (see [`parse_amount`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateInput {
    /// Gross estate value before any deduction.
    pub total_estate: Decimal,
    /// Estimated funeral expenses.
    pub funeral_expenses: Decimal,
    /// Outstanding debts of the deceased.
    pub debts: Decimal,
    /// Requested bequest (wasiyyah), before the one-third cap.
    pub wasiyyah: Decimal,
}

impl EstateInput {
    /// Bundles the four input figures.
    #[must_use]
    pub const fn new(
        total_estate: Decimal,
        funeral_expenses: Decimal,
        debts: Decimal,
        wasiyyah: Decimal,
    ) -> Self {
        Self {
            total_estate,
            funeral_expenses,
            debts,
            wasiyyah,
        }
    }

    /// Builds an input from caller-held state where the funeral and bequest
    /// figures arrive as free text fields.
    #[must_use]
    pub fn from_caller_fields(
        total_estate: Decimal,
        funeral_expenses: &str,
        debts: Decimal,
        wasiyyah: &str,
    ) -> Self {
        Self::new(
            total_estate,
            parse_amount(funeral_expenses),
            debts,
            parse_amount(wasiyyah),
        )
    }
}

/// Result of the pre-distribution deduction stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetEstate {
    /// Funeral expenses plus debts, deducted first.
    pub funeral_and_debts: Decimal,
    /// Estate remaining after liabilities, floored at zero.
    pub estate_after_debts: Decimal,
    /// Bequest actually deducted, capped at one third of the post-debt estate.
    pub wasiyyah_amount: Decimal,
    /// The amount actually divided among heirs.
    pub net_distributable: Decimal,
}

impl NetEstate {
    /// Applies the deduction stages in their fixed order.
    ///
    /// Liabilities always take priority over any distribution, and the
    /// bequest can never exceed one third of what remains after them,
    /// regardless of the testator's stated wish.
    #[must_use]
    pub fn compute(input: &EstateInput) -> Self {
        let funeral_and_debts = input.funeral_expenses + input.debts;
        let estate_after_debts = (input.total_estate - funeral_and_debts).max(Decimal::ZERO);

        let max_wasiyyah = estate_after_debts / Decimal::from(3);
        let wasiyyah_amount = input.wasiyyah.min(max_wasiyyah);

        Self {
            funeral_and_debts,
            estate_after_debts,
            wasiyyah_amount,
            net_distributable: estate_after_debts - wasiyyah_amount,
        }
    }
}
