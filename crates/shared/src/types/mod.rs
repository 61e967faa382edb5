//! Common types used across the application.

pub mod country;
pub mod id;
pub mod money;

pub use country::{COUNTRIES, Country};
pub use id::*;
pub use money::{Currency, Money};
