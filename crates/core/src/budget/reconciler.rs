//! Budget-vs-actual reconciler.
//!
//! Compares budgeted amounts against realized expenses for one accounting
//! year, either at account-group granularity (both sides normalized through
//! the grouping resolver, full outer join) or per budget line with
//! prefix-matched actuals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{BudgetComparison, VarianceStatus};
use crate::grouping::resolve_group;
use crate::records::{BudgetLine, Expense};

/// Budget reconciliation service.
pub struct BudgetReconciler;

impl BudgetReconciler {
    /// Compares budget and spend by account group for `year`.
    ///
    /// Budget lines and expenses are both normalized through the grouping
    /// resolver, so a budget line at 3-digit granularity absorbs expenses
    /// posted at 4-digit granularity and vice versa. A group present on
    /// only one side reports zero on the other; a group present on neither
    /// never appears.
    #[must_use]
    pub fn reconcile_by_group(
        budget_lines: &[BudgetLine],
        expenses: &[Expense],
        year: i32,
    ) -> Vec<BudgetComparison> {
        let mut sides: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();

        for line in budget_lines.iter().filter(|l| l.year == year) {
            sides.entry(resolve_group(&line.account_code)).or_default().0 += line.amount;
        }
        for expense in expenses.iter().filter(|e| e.year == year) {
            sides
                .entry(resolve_group(&expense.account_code))
                .or_default()
                .1 += expense.amount_incl_tax;
        }

        debug!(year, groups = sides.len(), "budget reconciliation by group");

        sides
            .into_iter()
            .map(|(key, (budget_total, actual_total))| {
                Self::compare(key, budget_total, actual_total)
            })
            .collect()
    }

    /// Compares budget and spend per budget line for `year`, matching
    /// actuals by account-code prefix.
    ///
    /// The actual for a budget line is the sum of every expense whose
    /// account code starts with that line's account code, which lets budget
    /// lines sit at a coarser granularity than the expense accounts.
    #[must_use]
    pub fn reconcile_by_prefix(
        budget_lines: &[BudgetLine],
        expenses: &[Expense],
        year: i32,
    ) -> Vec<BudgetComparison> {
        let mut budgets: BTreeMap<String, Decimal> = BTreeMap::new();
        for line in budget_lines.iter().filter(|l| l.year == year) {
            *budgets.entry(line.account_code.trim().to_string()).or_default() += line.amount;
        }

        budgets
            .into_iter()
            .map(|(code, budget_total)| {
                let actual_total: Decimal = expenses
                    .iter()
                    .filter(|e| e.year == year && e.account_code.trim().starts_with(&code))
                    .map(|e| e.amount_incl_tax)
                    .sum();
                Self::compare(code, budget_total, actual_total)
            })
            .collect()
    }

    /// Builds one comparison row. Zero budget yields a 0% variance by
    /// design, never a division failure.
    fn compare(key: String, budget_total: Decimal, actual_total: Decimal) -> BudgetComparison {
        let variance_amount = budget_total - actual_total;

        let variance_percent = if budget_total.is_zero() {
            Decimal::ZERO
        } else {
            (variance_amount / budget_total * Decimal::ONE_HUNDRED).round_dp(2)
        };

        let status = match variance_amount.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceStatus::Favorable,
            std::cmp::Ordering::Less => VarianceStatus::Unfavorable,
            std::cmp::Ordering::Equal => VarianceStatus::OnBudget,
        };

        BudgetComparison {
            key,
            budget_total,
            actual_total,
            variance_amount,
            variance_percent,
            status,
        }
    }
}
