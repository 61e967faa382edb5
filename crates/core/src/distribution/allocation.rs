//! Per-head amount splitting using the Largest Remainder Method.
//!
//! A distribution entry carries one aggregate amount per heir class; the
//! will document lists each individual. Splitting the aggregate must not
//! lose or invent a single currency unit, so the split rounds every head
//! down and hands the leftover units to the first heads.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Splits `total` equally across `heads`, exact to the unit.
///
/// The returned amounts all carry `decimal_places` decimals and sum exactly
/// to `total` rounded to that precision. The first heads receive the extra
/// unit when the division does not come out even.
#[must_use]
pub fn split_per_head(total: Decimal, heads: u32, decimal_places: u32) -> Vec<Decimal> {
    if heads == 0 {
        return Vec::new();
    }

    let total =
        total.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
    if heads == 1 {
        return vec![total];
    }

    let heads_dec = Decimal::from(heads);
    let unit = Decimal::new(1, decimal_places);

    // Round down for the base amount, then count leftover units.
    let base = (total / heads_dec).round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero);
    let remainder = total - base * heads_dec;
    let extra_units = (remainder / unit)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_u64()
        .unwrap_or(0);
    let extra_units = usize::try_from(extra_units).unwrap_or(0);
    let head_count = usize::try_from(heads).unwrap_or(usize::MAX);

    (0..head_count)
        .map(|i| if i < extra_units { base + unit } else { base })
        .collect()
}
