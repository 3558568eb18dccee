//! Allocation report types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tantiem_shared::types::{ExpenseId, LotId};

/// Allocated total for one lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotTotal {
    /// Lot ID.
    pub lot_id: LotId,
    /// Lot label.
    pub label: String,
    /// Lot tantièmes over the base denominator.
    pub tantiemes: u32,
    /// Sum of all amounts allocated to this lot.
    pub total: Decimal,
    /// This lot's total as a percentage of the whole-property total,
    /// rounded to 2 decimal places. Zero when the property total is zero.
    pub share_of_property_percent: Decimal,
}

/// Allocated subtotal for one (account group, lot) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupLotTotal {
    /// Reporting group the contributing expenses belong to.
    pub account_group: String,
    /// Lot ID.
    pub lot_id: LotId,
    /// Lot label.
    pub lot_label: String,
    /// Subtotal allocated to this lot for this group.
    pub total: Decimal,
}

/// Result of distributing a batch of expenses across lots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    /// One row per input lot, ordered by label. Lots nothing was allocated
    /// to appear with a zero total.
    pub lot_totals: Vec<LotTotal>,
    /// Sparse (account group, lot) subtotals, ordered by group then label.
    pub group_totals: Vec<GroupLotTotal>,
    /// Allocated sum per expense. The reconciliation checker compares these
    /// against recorded amounts.
    pub expense_totals: BTreeMap<ExpenseId, Decimal>,
    /// Whole-property total (sum over all lots).
    pub property_total: Decimal,
    /// Allocation rows excluded because they referenced a missing expense
    /// or lot. Surfaced so callers can show a warning; never an error.
    pub orphaned_rows: usize,
}
