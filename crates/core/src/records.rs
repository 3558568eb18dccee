//! Input rows as fetched by the data-access layer.
//!
//! The hosted backend owns every record; these types describe the shape rows
//! arrive in for one report rendering pass. The engines never mutate or
//! persist them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tantiem_shared::types::{ExpenseId, LotId};

/// Base denominator the tantièmes of a property are expressed over.
///
/// The sum of all lots' tantièmes conventionally equals this value, though
/// nothing here enforces it; the reconciliation checker reports drift.
pub const DEFAULT_BASE_DENOMINATOR: u32 = 10_000;

/// An expense posted against the property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Accounting year the expense belongs to.
    pub year: i32,
    /// Raw account code (e.g., "60612").
    pub account_code: String,
    /// Amount including tax. Negative for credit notes and refunds.
    pub amount_incl_tax: Decimal,
    /// Supplier name, when known.
    pub supplier: Option<String>,
    /// Invoice date, when known.
    pub date: Option<NaiveDate>,
}

/// A unit of ownership in the property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    /// Lot ID.
    pub id: LotId,
    /// Human-readable lot label (unique per property).
    pub label: String,
    /// Fractional interest of this lot, in tantièmes over the base
    /// denominator.
    pub tantiemes: u32,
}

/// Distribution key tying one expense to one lot.
///
/// The share is expressed over the same base denominator as lot tantièmes.
/// A row referencing a missing expense or lot is excluded from sums, never
/// fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    /// Expense this row distributes.
    pub expense_id: ExpenseId,
    /// Lot receiving the share.
    pub lot_id: LotId,
    /// Share of the expense, in tantièmes over the base denominator.
    pub share: Decimal,
}

/// A budgeted amount for one (year, account) combination.
///
/// The account code may be coarser than expense account codes; the grouping
/// resolver and prefix matching absorb the granularity difference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Accounting year.
    pub year: i32,
    /// Account code or account-group code.
    pub account_code: String,
    /// Budgeted amount.
    pub amount: Decimal,
}
