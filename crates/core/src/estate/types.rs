//! Ledger item types and estate aggregation.

use chrono::{DateTime, Utc};
use mirath_shared::types::LedgerItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a ledger item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerItemType {
    /// Something owned (property, cash, investments).
    Asset,
    /// Money owed to someone else.
    Debt,
    /// Money owed to the estate by someone else.
    Credit,
}

/// A single wealth ledger item.
///
/// These are in-memory values supplied by the caller; storage and editing
/// live outside this workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerItem {
    /// Unique identifier for this item.
    pub id: LedgerItemId,
    /// Asset, debt, or credit.
    pub item_type: LedgerItemType,
    /// Free-form category (e.g., "Property", "Cash").
    pub category: String,
    /// Amount in the caller's currency base unit.
    pub amount: Decimal,
    /// Free-form description.
    pub description: String,
    /// Creditor or debtor name, where relevant.
    pub party_name: Option<String>,
    /// When the item was recorded.
    pub date: DateTime<Utc>,
}

impl LedgerItem {
    /// The item's contribution to net worth: debts subtract, the rest add.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.item_type {
            LedgerItemType::Asset | LedgerItemType::Credit => self.amount,
            LedgerItemType::Debt => -self.amount,
        }
    }
}

/// Aggregated estate figures computed from a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateSummary {
    /// Sum of all asset amounts.
    pub total_assets: Decimal,
    /// Sum of all debt amounts.
    pub total_debts: Decimal,
    /// Sum of all credit amounts.
    pub total_credits: Decimal,
    /// Assets plus credits minus debts.
    pub net_worth: Decimal,
}

impl EstateSummary {
    /// Sums a ledger into estate totals.
    #[must_use]
    pub fn from_items(items: &[LedgerItem]) -> Self {
        let sum_of = |wanted: LedgerItemType| {
            items
                .iter()
                .filter(|i| i.item_type == wanted)
                .map(|i| i.amount)
                .sum::<Decimal>()
        };

        Self {
            total_assets: sum_of(LedgerItemType::Asset),
            total_debts: sum_of(LedgerItemType::Debt),
            total_credits: sum_of(LedgerItemType::Credit),
            net_worth: items.iter().map(LedgerItem::signed_amount).sum(),
        }
    }

    /// The estate figure before debt deduction (net worth plus debts).
    ///
    /// This is the `total_estate` the distribution engine expects; the
    /// engine deducts the debts again itself as part of its first stage.
    #[must_use]
    pub fn gross_estate(&self) -> Decimal {
        self.net_worth + self.total_debts
    }
}
