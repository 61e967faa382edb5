//! Ledger aggregation and net-estate deductions.
//!
//! Callers hold ledger items in memory; this module sums them into estate
//! figures and applies the pre-distribution deductions (funeral expenses,
//! debts, and the capped bequest).

pub mod net;
pub mod types;

pub use net::{EstateInput, NetEstate};
pub use types::{EstateSummary, LedgerItem, LedgerItemType};
