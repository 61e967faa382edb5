//! Heir vocabulary and declared-heir sets.

pub mod error;
pub mod types;

pub use error::HeirError;
pub use types::{Heir, HeirSet, HeirType};
