//! Allocation engine.
//!
//! Distributes each expense's amount across lots according to per-lot
//! fractional shares expressed over a fixed base denominator, then
//! aggregates per-lot, per-(account group, lot), and per-expense totals.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tantiem_shared::types::{ExpenseId, LotId};
use tracing::debug;

use super::types::{AllocationReport, GroupLotTotal, LotTotal};
use crate::grouping::resolve_group;
use crate::records::{Allocation, Expense, Lot};

/// Allocation service.
///
/// A pure, side-effect-free reduction over an immutable input batch; the
/// caller fetches rows for one rendering pass and hands them in as slices.
pub struct AllocationService;

impl AllocationService {
    /// Distributes the expenses of a batch across lots.
    ///
    /// `lot_amount = expense.amount * share / base_denominator` per
    /// allocation row. Amounts accumulate at full decimal precision; only
    /// the share-of-property percentage is rounded. Rows referencing a
    /// missing expense or lot contribute nothing and are counted in
    /// `orphaned_rows`.
    ///
    /// # Panics
    ///
    /// Panics if `base_denominator` is zero.
    #[must_use]
    pub fn allocate(
        expenses: &[Expense],
        allocations: &[Allocation],
        lots: &[Lot],
        base_denominator: u32,
    ) -> AllocationReport {
        assert!(base_denominator > 0, "base denominator must be non-zero");
        let base = Decimal::from(base_denominator);

        debug!(
            expenses = expenses.len(),
            allocations = allocations.len(),
            lots = lots.len(),
            "allocating expense batch"
        );

        let expense_index: HashMap<ExpenseId, &Expense> =
            expenses.iter().map(|e| (e.id, e)).collect();
        let lot_index: HashMap<LotId, &Lot> = lots.iter().map(|l| (l.id, l)).collect();

        let mut lot_sums: BTreeMap<LotId, Decimal> = BTreeMap::new();
        let mut group_sums: BTreeMap<(String, LotId), Decimal> = BTreeMap::new();
        let mut expense_totals: BTreeMap<ExpenseId, Decimal> = BTreeMap::new();
        let mut orphaned_rows = 0;

        for row in allocations {
            let (Some(expense), Some(lot)) = (
                expense_index.get(&row.expense_id),
                lot_index.get(&row.lot_id),
            ) else {
                orphaned_rows += 1;
                continue;
            };

            let amount = expense.amount_incl_tax * row.share / base;
            *lot_sums.entry(lot.id).or_default() += amount;
            *group_sums
                .entry((resolve_group(&expense.account_code), lot.id))
                .or_default() += amount;
            *expense_totals.entry(expense.id).or_default() += amount;
        }

        if orphaned_rows > 0 {
            debug!(orphaned_rows, "skipped allocation rows with missing references");
        }

        let property_total: Decimal = lot_sums.values().copied().sum();

        let mut lot_totals: Vec<LotTotal> = lots
            .iter()
            .map(|lot| {
                let total = lot_sums.get(&lot.id).copied().unwrap_or(Decimal::ZERO);
                let share_of_property_percent = if property_total.is_zero() {
                    Decimal::ZERO
                } else {
                    (total / property_total * Decimal::ONE_HUNDRED).round_dp(2)
                };
                LotTotal {
                    lot_id: lot.id,
                    label: lot.label.clone(),
                    tantiemes: lot.tantiemes,
                    total,
                    share_of_property_percent,
                }
            })
            .collect();
        lot_totals.sort_by(|a, b| a.label.cmp(&b.label));

        let mut group_totals: Vec<GroupLotTotal> = group_sums
            .into_iter()
            .map(|((account_group, lot_id), total)| GroupLotTotal {
                account_group,
                lot_id,
                lot_label: lot_index
                    .get(&lot_id)
                    .map_or_else(String::new, |l| l.label.clone()),
                total,
            })
            .collect();
        group_totals.sort_by(|a, b| {
            (&a.account_group, &a.lot_label).cmp(&(&b.account_group, &b.lot_label))
        });

        AllocationReport {
            lot_totals,
            group_totals,
            expense_totals,
            property_total,
            orphaned_rows,
        }
    }
}
