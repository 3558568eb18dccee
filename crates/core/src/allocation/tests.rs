//! Property-based tests for the allocation engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tantiem_shared::types::{ExpenseId, LotId};

use super::engine::AllocationService;
use crate::records::{Allocation, Expense, Lot, DEFAULT_BASE_DENOMINATOR};

/// Strategy to generate signed amounts in cents (-10M to 10M, credit notes
/// included).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate shares that sum exactly to the base denominator.
fn full_share_split() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=2500, 0..4).prop_map(|mut partial| {
        let used: u32 = partial.iter().sum();
        partial.push(DEFAULT_BASE_DENOMINATOR - used);
        partial
    })
}

fn make_expense(amount: Decimal) -> Expense {
    Expense {
        id: ExpenseId::new(),
        year: 2025,
        account_code: "606".to_string(),
        amount_incl_tax: amount,
        supplier: None,
        date: None,
    }
}

fn make_lot(label: String) -> Lot {
    Lot {
        id: LotId::new(),
        label,
        tantiemes: 0,
    }
}

proptest! {
    /// Conservation law: when an expense's shares sum exactly to the base
    /// denominator, the per-lot allocated amounts sum back to the recorded
    /// amount with no drift.
    #[test]
    fn test_full_split_conserves_the_expense_amount(
        amount in amount(),
        shares in full_share_split(),
    ) {
        let expense = make_expense(amount);
        let lots: Vec<Lot> = (0..shares.len())
            .map(|i| make_lot(format!("Lot {i:02}")))
            .collect();
        let rows: Vec<Allocation> = shares
            .iter()
            .zip(&lots)
            .map(|(&share, lot)| Allocation {
                expense_id: expense.id,
                lot_id: lot.id,
                share: Decimal::from(share),
            })
            .collect();

        let report = AllocationService::allocate(
            &[expense.clone()],
            &rows,
            &lots,
            DEFAULT_BASE_DENOMINATOR,
        );

        prop_assert_eq!(report.property_total, amount);
        prop_assert_eq!(report.expense_totals[&expense.id], amount);
    }

    /// Orphaned rows never move any total.
    #[test]
    fn test_orphaned_rows_do_not_affect_totals(
        amount in amount(),
        orphan_share in 0u32..=10_000,
    ) {
        let expense = make_expense(amount);
        let lot = make_lot("A".to_string());
        let valid = Allocation {
            expense_id: expense.id,
            lot_id: lot.id,
            share: Decimal::from(DEFAULT_BASE_DENOMINATOR),
        };
        let orphan = Allocation {
            expense_id: ExpenseId::new(),
            lot_id: LotId::new(),
            share: Decimal::from(orphan_share),
        };

        let clean = AllocationService::allocate(
            &[expense.clone()],
            std::slice::from_ref(&valid),
            std::slice::from_ref(&lot),
            DEFAULT_BASE_DENOMINATOR,
        );
        let with_orphan = AllocationService::allocate(
            &[expense],
            &[valid, orphan],
            &[lot],
            DEFAULT_BASE_DENOMINATOR,
        );

        prop_assert_eq!(clean.property_total, with_orphan.property_total);
        prop_assert_eq!(with_orphan.orphaned_rows, 1);
    }

    /// Lot percentages sum to roughly 100 whenever the property total is
    /// positive and every lot received a non-negative amount.
    #[test]
    fn test_percentages_sum_to_one_hundred(
        shares in full_share_split(),
    ) {
        let expense = make_expense(Decimal::new(100_000, 2));
        let lots: Vec<Lot> = (0..shares.len())
            .map(|i| make_lot(format!("Lot {i:02}")))
            .collect();
        let rows: Vec<Allocation> = shares
            .iter()
            .zip(&lots)
            .map(|(&share, lot)| Allocation {
                expense_id: expense.id,
                lot_id: lot.id,
                share: Decimal::from(share),
            })
            .collect();

        let report =
            AllocationService::allocate(&[expense], &rows, &lots, DEFAULT_BASE_DENOMINATOR);

        let percent_sum: Decimal = report
            .lot_totals
            .iter()
            .map(|l| l.share_of_property_percent)
            .sum();
        // Each percentage is rounded to 2 dp, so allow a cent of drift per lot.
        let drift = (percent_sum - Decimal::ONE_HUNDRED).abs();
        prop_assert!(drift <= Decimal::new(shares.len() as i64, 2));
    }
}
