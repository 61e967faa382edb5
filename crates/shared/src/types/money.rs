//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the currency's base unit.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "XAF", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Central African CFA Franc
    Xaf,
    /// Nigerian Naira
    Ngn,
    /// British Pound Sterling
    Gbp,
    /// US Dollar
    Usd,
    /// Saudi Riyal
    Sar,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }
}

/// Parses a free-text monetary field into a `Decimal`.
///
/// Callers feed raw text-field input here; anything that does not parse as a
/// non-negative number (empty string, garbage, negative sign) becomes
/// `Decimal::ZERO`. This is the sanitization contract the calculation engine
/// relies on: it never sees NaN-like or negative figures from text inputs.
#[must_use]
pub fn parse_amount(input: &str) -> Decimal {
    match input.trim().parse::<Decimal>() {
        Ok(value) if value.is_sign_negative() => Decimal::ZERO,
        Ok(value) => value,
        Err(_) => Decimal::ZERO,
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xaf => write!(f, "XAF"),
            Self::Ngn => write!(f, "NGN"),
            Self::Gbp => write!(f, "GBP"),
            Self::Usd => write!(f, "USD"),
            Self::Sar => write!(f, "SAR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "XAF" => Ok(Self::Xaf),
            "NGN" => Ok(Self::Ngn),
            "GBP" => Ok(Self::Gbp),
            "USD" => Ok(Self::Usd),
            "SAR" => Ok(Self::Sar),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
