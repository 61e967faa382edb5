//! Property-based tests for the distribution engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::estate::{EstateInput, NetEstate};
use crate::heir::{Heir, HeirSet, HeirType};

use super::engine::DistributionEngine;

const EPSILON: Decimal = dec!(0.000001);

/// Strategy for non-negative monetary amounts (0.00 to 1,000,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a valid declared-heir set: unique types, counts 1 to 4.
fn heir_set() -> impl Strategy<Value = HeirSet> {
    proptest::sample::subsequence(HeirType::ALL.to_vec(), 0..=HeirType::COUNT)
        .prop_flat_map(|types| {
            let counts = prop::collection::vec(1u32..=4, types.len());
            (Just(types), counts)
        })
        .prop_map(|(types, counts)| {
            let heirs: Vec<Heir> = types
                .iter()
                .zip(counts)
                .map(|(heir_type, count)| Heir::new(*heir_type, count))
                .collect();
            HeirSet::from_heirs(&heirs).expect("unique types with positive counts")
        })
}

fn input() -> impl Strategy<Value = EstateInput> {
    (amount(), amount(), amount(), amount())
        .prop_map(|(total, funeral, debts, wasiyyah)| EstateInput::new(total, funeral, debts, wasiyyah))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The net distributable estate is never negative.
    #[test]
    fn prop_net_estate_non_negative(input in input(), heirs in heir_set()) {
        let result = DistributionEngine::compute(&input, &heirs);
        prop_assert!(result.net_distributable_estate >= Decimal::ZERO);
    }

    /// The bequest never exceeds its cap or the requested figure.
    #[test]
    fn prop_wasiyyah_cap(input in input(), heirs in heir_set()) {
        let result = DistributionEngine::compute(&input, &heirs);
        let after_debts = (input.total_estate - input.funeral_expenses - input.debts)
            .max(Decimal::ZERO);

        prop_assert!(result.wasiyyah_amount <= input.wasiyyah);
        prop_assert!(result.wasiyyah_amount <= after_debts / Decimal::from(3));
    }

    /// Emitted shares never over-allocate the estate.
    #[test]
    fn prop_shares_never_exceed_one(input in input(), heirs in heir_set()) {
        let result = DistributionEngine::compute(&input, &heirs);
        prop_assert!(result.total_share() <= Decimal::ONE + EPSILON);
    }

    /// Whenever there is something to divide, emitted shares plus the
    /// reported unallocated fraction account for the whole estate.
    #[test]
    fn prop_shares_plus_unallocated_cover_estate(input in input(), heirs in heir_set()) {
        let result = DistributionEngine::compute(&input, &heirs);
        if result.net_distributable_estate > Decimal::ZERO {
            let covered = result.total_share() + result.unallocated_share;
            prop_assert!((covered - Decimal::ONE).abs() < EPSILON,
                "covered {} should be 1", covered);
        }
    }

    /// Amounts are consistent with shares: their sum equals the allocated
    /// fraction of the net estate.
    #[test]
    fn prop_amounts_match_allocated_fraction(input in input(), heirs in heir_set()) {
        let result = DistributionEngine::compute(&input, &heirs);
        let allocated = (Decimal::ONE - result.unallocated_share)
            * result.net_distributable_estate;
        let diff = (result.total_amount() - allocated).abs();
        // relative tolerance, floored for tiny estates
        let tolerance = (allocated * EPSILON).max(EPSILON);
        prop_assert!(diff <= tolerance, "amount sum off by {}", diff);
    }

    /// Liabilities at or above the estate leave nothing to distribute.
    #[test]
    fn prop_consumed_estate_early_exit(
        total in amount(),
        extra in amount(),
        heirs in heir_set(),
    ) {
        let input = EstateInput::new(total, total + extra, Decimal::ZERO, Decimal::ZERO);
        let result = DistributionEngine::compute(&input, &heirs);
        prop_assert_eq!(result.net_distributable_estate, Decimal::ZERO);
        prop_assert!(result.distributions.is_empty());
    }

    /// The engine is deterministic: identical inputs, identical results.
    #[test]
    fn prop_deterministic(input in input(), heirs in heir_set()) {
        let first = DistributionEngine::compute(&input, &heirs);
        let second = DistributionEngine::compute(&input, &heirs);
        prop_assert_eq!(first, second);
    }

    /// No emitted entry has a non-positive share, a zero count, or an heir
    /// type without a share rule.
    #[test]
    fn prop_entries_well_formed(input in input(), heirs in heir_set()) {
        let result = DistributionEngine::compute(&input, &heirs);
        for distribution in &result.distributions {
            prop_assert!(distribution.share > Decimal::ZERO);
            prop_assert!(distribution.count >= 1);
            prop_assert!(distribution.heir.has_share_rule());
        }
    }

    /// The deduction stages agree with `NetEstate::compute`.
    #[test]
    fn prop_deductions_match_net_estate(input in input(), heirs in heir_set()) {
        let result = DistributionEngine::compute(&input, &heirs);
        let net = NetEstate::compute(&input);
        prop_assert_eq!(result.funeral_and_debts, net.funeral_and_debts);
        prop_assert_eq!(result.wasiyyah_amount, net.wasiyyah_amount);
    }
}
