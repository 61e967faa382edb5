//! The Fara'id distribution engine.
//!
//! A pure, staged computation: deduct liabilities, cap the bequest, assign
//! fixed Qur'anic shares, abate proportionally when over-subscribed (Awal),
//! allocate the residue to residuary heirs (Asabah), and fall back to a
//! partial redistribution (Radd) when no residuary heir exists.
//!
//! Known doctrinal simplifications are preserved from the source system and
//! documented where they apply (no sibling heirs, pooled wife share, Radd
//! limited to non-spouse fixed heirs).

pub mod allocation;
pub mod engine;
pub mod residue;
pub mod shares;
pub mod types;


#[cfg(test)]
mod props;

pub use allocation::split_per_head;
pub use engine::DistributionEngine;
pub use types::{CalculationNote, CalculationResult, Distribution, ShareTable};
