//! Shared vocabulary types for Mirath.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Currency and country descriptors
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::country::{COUNTRIES, Country};
pub use types::money::{Currency, Money, parse_amount};
