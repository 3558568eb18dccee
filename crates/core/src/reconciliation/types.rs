//! Reconciliation report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tantiem_shared::types::ExpenseId;

/// An expense whose allocated sum drifted from its recorded amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationIssue {
    /// Expense ID.
    pub expense_id: ExpenseId,
    /// Raw account code of the expense.
    pub account_code: String,
    /// Amount recorded on the expense.
    pub recorded_amount: Decimal,
    /// Sum of the amounts its allocation rows distribute.
    pub allocated_sum: Decimal,
    /// `recorded_amount - allocated_sum`.
    pub deviation: Decimal,
}
