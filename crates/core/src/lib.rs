//! Charge allocation and budget reconciliation logic for Tantiem.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Callers fetch rows from the hosted backend, hand them in as
//! slices, and receive report structures back; nothing here performs I/O.
//!
//! # Modules
//!
//! - `records` - Input rows as fetched by the data-access layer
//! - `grouping` - Account code to reporting-group resolution
//! - `allocation` - Distribution of expenses across lots by tantièmes
//! - `reconciliation` - Allocated-total vs recorded-amount auditing
//! - `budget` - Budget vs actual comparison
//! - `funding` - Quarterly call-for-funds calculation

pub mod allocation;
pub mod budget;
pub mod funding;
pub mod grouping;
pub mod reconciliation;
pub mod records;
