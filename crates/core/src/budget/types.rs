//! Budget comparison types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Under budget (favorable for expenses).
    Favorable,
    /// Over budget (unfavorable for expenses).
    Unfavorable,
    /// On budget (no variance).
    OnBudget,
}

/// Budget vs actual figures for one comparison key.
///
/// The key is an account group when comparing by group, or a budget line's
/// account code in prefix-match mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetComparison {
    /// Comparison key.
    pub key: String,
    /// Total budgeted amount.
    pub budget_total: Decimal,
    /// Total realized spend.
    pub actual_total: Decimal,
    /// `budget_total - actual_total`.
    pub variance_amount: Decimal,
    /// Variance as a percentage of the budget, rounded to 2 decimal
    /// places. Defined as 0 when the budget total is zero.
    pub variance_percent: Decimal,
    /// Variance status (expense orientation).
    pub status: VarianceStatus,
}
