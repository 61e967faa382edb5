//! Heir validation error types.

use thiserror::Error;

use super::types::HeirType;

/// Errors raised while building a declared-heir set.
///
/// These surface only at construction. The distribution engine itself is
/// total and never returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeirError {
    /// The same heir type was declared more than once.
    #[error("Heir type declared more than once: {0}")]
    DuplicateHeir(HeirType),

    /// A declared heir entry had a count of zero.
    #[error("Heir count must be at least 1: {0}")]
    ZeroCount(HeirType),
}
