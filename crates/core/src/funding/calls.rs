//! Call-for-funds calculator.
//!
//! Divides an annual budget into four equal installments and computes the
//! statutory reserve supplement (loi ALUR, 5% of the annual budget). The
//! reserve is an annual figure billed separately; both the plain quarterly
//! amount and the reserve-inclusive figure are exposed so the caller picks
//! the billing cadence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tantiem_shared::types::LotId;

use crate::records::Lot;

/// Statutory reserve rate: 5% of the annual budget.
#[must_use]
pub fn default_reserve_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Quarterly funding schedule derived from an annual budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlySchedule {
    /// Annual budget total the schedule was derived from.
    pub annual_budget_total: Decimal,
    /// One of four equal installments (annual total / 4). No proration for
    /// partial years or mid-year lot sales.
    pub per_quarter_amount: Decimal,
    /// Statutory reserve supplement for the whole year.
    pub reserve_amount: Decimal,
    /// Quarterly installment plus the full annual reserve, for the quarter
    /// the reserve is billed with.
    pub total_per_quarter_with_reserve: Decimal,
}

/// One line of a call-for-funds document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallLine {
    /// Lot the line bills.
    pub lot_id: LotId,
    /// Display label (the lot label).
    pub label: String,
    /// Amount called from this lot for the quarter.
    pub amount: Decimal,
}

/// Pre-computed line items for one quarter's call, handed to the document
/// collaborator which does layout only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallStatement {
    /// Per-lot call lines, ordered by label.
    pub lines: Vec<CallLine>,
    /// Annual reserve amount, carried as a separate line.
    pub reserve_amount: Decimal,
    /// Sum of the per-lot lines.
    pub called_total: Decimal,
}

/// Call-for-funds service.
pub struct FundingService;

impl FundingService {
    /// Derives the quarterly schedule from an annual budget total.
    #[must_use]
    pub fn quarterly_calls(annual_budget_total: Decimal, reserve_rate: Decimal) -> QuarterlySchedule {
        let per_quarter_amount = annual_budget_total / Decimal::from(4);
        let reserve_amount = annual_budget_total * reserve_rate;

        QuarterlySchedule {
            annual_budget_total,
            per_quarter_amount,
            reserve_amount,
            total_per_quarter_with_reserve: per_quarter_amount + reserve_amount,
        }
    }

    /// Builds the per-lot line items for one quarter's call.
    ///
    /// Each lot is billed `per_quarter_amount * tantièmes / base_denominator`.
    ///
    /// # Panics
    ///
    /// Panics if `base_denominator` is zero.
    #[must_use]
    pub fn call_statement(
        schedule: &QuarterlySchedule,
        lots: &[Lot],
        base_denominator: u32,
    ) -> CallStatement {
        assert!(base_denominator > 0, "base denominator must be non-zero");
        let base = Decimal::from(base_denominator);

        let mut lines: Vec<CallLine> = lots
            .iter()
            .map(|lot| CallLine {
                lot_id: lot.id,
                label: lot.label.clone(),
                amount: schedule.per_quarter_amount * Decimal::from(lot.tantiemes) / base,
            })
            .collect();
        lines.sort_by(|a, b| a.label.cmp(&b.label));

        let called_total = lines.iter().map(|l| l.amount).sum();

        CallStatement {
            lines,
            reserve_amount: schedule.reserve_amount,
            called_total,
        }
    }
}
