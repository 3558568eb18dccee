//! Budget vs actual comparison.

pub mod reconciler;
pub mod types;


pub use reconciler::BudgetReconciler;
pub use types::{BudgetComparison, VarianceStatus};
