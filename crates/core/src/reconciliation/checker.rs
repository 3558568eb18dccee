//! Reconciliation checker.
//!
//! For every expense, sums the amounts its allocation rows distribute and
//! flags the expenses whose allocated sum deviates from the recorded amount
//! beyond a tolerance. An expense with no allocation rows is flagged for its
//! full amount; surfacing unallocated expenses is the point of this report.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tantiem_shared::types::ExpenseId;
use tracing::debug;

use super::types::ReconciliationIssue;
use crate::records::{Allocation, Expense};

/// Default tolerance absorbing rounding noise: 0.01 currency unit.
#[must_use]
pub fn default_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Reconciliation service.
pub struct ReconciliationService;

impl ReconciliationService {
    /// Flags expenses whose allocated sum deviates from their recorded
    /// amount by more than `tolerance`.
    ///
    /// Each allocation row contributes
    /// `expense.amount * share / base_denominator` to its expense's
    /// allocated sum; rows referencing an expense outside the batch are
    /// ignored. The result is ordered by expense id ascending so repeated
    /// runs over the same batch are reproducible.
    ///
    /// # Panics
    ///
    /// Panics if `base_denominator` is zero.
    #[must_use]
    pub fn check(
        expenses: &[Expense],
        allocations: &[Allocation],
        base_denominator: u32,
        tolerance: Decimal,
    ) -> Vec<ReconciliationIssue> {
        assert!(base_denominator > 0, "base denominator must be non-zero");
        let base = Decimal::from(base_denominator);

        let mut share_sums: BTreeMap<ExpenseId, Decimal> = BTreeMap::new();
        for row in allocations {
            *share_sums.entry(row.expense_id).or_default() += row.share;
        }

        let mut sorted: Vec<&Expense> = expenses.iter().collect();
        sorted.sort_by_key(|e| e.id);

        let issues: Vec<ReconciliationIssue> = sorted
            .into_iter()
            .filter_map(|expense| {
                let shares = share_sums
                    .get(&expense.id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let allocated_sum = expense.amount_incl_tax * shares / base;
                let deviation = expense.amount_incl_tax - allocated_sum;
                (deviation.abs() > tolerance).then(|| ReconciliationIssue {
                    expense_id: expense.id,
                    account_code: expense.account_code.clone(),
                    recorded_amount: expense.amount_incl_tax,
                    allocated_sum,
                    deviation,
                })
            })
            .collect();

        debug!(
            expenses = expenses.len(),
            flagged = issues.len(),
            "reconciliation pass complete"
        );

        issues
    }
}
