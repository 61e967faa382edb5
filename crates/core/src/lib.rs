//! Core business logic for Mirath.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `heir` - Heir vocabulary and declared-heir sets
//! - `estate` - Ledger aggregation and net-estate deductions
//! - `distribution` - The Fara'id distribution engine

pub mod distribution;
pub mod estate;
pub mod heir;
