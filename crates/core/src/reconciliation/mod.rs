//! Allocated-total vs recorded-amount auditing.

pub mod checker;
pub mod types;


pub use checker::{default_tolerance, ReconciliationService};
pub use types::ReconciliationIssue;
