use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::balance_model::Transfer;
use super::balance_service::{aggregate, plan_transfers, BalanceService};
use crate::errors::{Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait, ExpenseShare};
use crate::settlements::{Settlement, SettlementRepositoryTrait, SettlementStatus};

fn expense(payer: &str, amount: Decimal, shares: &[(&str, Decimal)]) -> Expense {
    Expense {
        id: format!("exp-{}-{}", payer, amount),
        trip_id: "trip-1".to_string(),
        payer_id: payer.to_string(),
        title: "Expense".to_string(),
        amount,
        currency: "RUB".to_string(),
        category: None,
        spent_at: None,
        fx_rate: Some(Decimal::ONE),
        amount_home: Some(amount),
        created_at: Utc::now(),
        shares: shares
            .iter()
            .map(|(user_id, weight)| ExpenseShare {
                user_id: user_id.to_string(),
                weight: *weight,
            })
            .collect(),
    }
}

fn settlement(from: &str, to: &str, amount: Decimal, status: SettlementStatus) -> Settlement {
    Settlement {
        id: format!("set-{}-{}", from, to),
        trip_id: "trip-1".to_string(),
        from_user_id: from.to_string(),
        to_user_id: to.to_string(),
        amount,
        currency: "RUB".to_string(),
        status,
        created_at: Utc::now(),
        confirmed_at: match status {
            SettlementStatus::Confirmed => Some(Utc::now()),
            SettlementStatus::Pending => None,
        },
    }
}

fn transfer(from: &str, to: &str, amount: Decimal) -> Transfer {
    Transfer {
        from_user_id: from.to_string(),
        to_user_id: to.to_string(),
        amount,
    }
}

/// Apply every transfer to the net map: the payer's balance rises toward
/// zero, the receiver's credit falls toward zero.
fn apply_transfers(net: &HashMap<String, Decimal>, transfers: &[Transfer]) -> HashMap<String, Decimal> {
    let mut net = net.clone();
    for t in transfers {
        *net.get_mut(&t.from_user_id).unwrap() += t.amount;
        *net.get_mut(&t.to_user_id).unwrap() -= t.amount;
    }
    net
}

#[test]
fn test_equal_three_way_split() {
    let expenses = vec![expense(
        "a",
        dec!(90.00),
        &[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))],
    )];

    let totals = aggregate(&expenses, &[]);

    assert_eq!(totals.paid, HashMap::from([("a".to_string(), dec!(90.00))]));
    assert_eq!(totals.owed["a"], dec!(30));
    assert_eq!(totals.owed["b"], dec!(30));
    assert_eq!(totals.owed["c"], dec!(30));
    assert_eq!(totals.net["a"], dec!(60.00));
    assert_eq!(totals.net["b"], dec!(-30.00));
    assert_eq!(totals.net["c"], dec!(-30.00));

    let transfers = plan_transfers(&totals.net).unwrap();
    assert_eq!(
        transfers,
        vec![
            transfer("b", "a", dec!(30.00)),
            transfer("c", "a", dec!(30.00)),
        ]
    );
}

#[test]
fn test_confirmed_settlement_reduces_debt() {
    let expenses = vec![expense(
        "a",
        dec!(90.00),
        &[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))],
    )];
    let settlements = vec![settlement("b", "a", dec!(30.00), SettlementStatus::Confirmed)];

    let totals = aggregate(&expenses, &settlements);

    assert_eq!(totals.net["a"], dec!(30.00));
    assert_eq!(totals.net["b"], dec!(0.00));
    assert_eq!(totals.net["c"], dec!(-30.00));

    let transfers = plan_transfers(&totals.net).unwrap();
    assert_eq!(transfers, vec![transfer("c", "a", dec!(30.00))]);
}

#[test]
fn test_pending_settlement_is_ignored() {
    let expenses = vec![expense("a", dec!(90.00), &[("b", dec!(1))])];
    let settlements = vec![settlement("b", "a", dec!(90.00), SettlementStatus::Pending)];

    let totals = aggregate(&expenses, &settlements);

    assert_eq!(totals.net["a"], dec!(90.00));
    assert_eq!(totals.net["b"], dec!(-90.00));
}

#[test]
fn test_zero_total_weight_counts_paid_but_not_owed() {
    let expenses = vec![expense(
        "a",
        dec!(50.00),
        &[("b", dec!(0)), ("c", dec!(0))],
    )];

    let totals = aggregate(&expenses, &[]);

    assert_eq!(totals.paid["a"], dec!(50.00));
    assert!(totals.owed.is_empty());
    assert_eq!(totals.net["a"], dec!(50.00));
}

#[test]
fn test_expense_without_shares_counts_paid_only() {
    let expenses = vec![expense("a", dec!(25.00), &[])];

    let totals = aggregate(&expenses, &[]);

    assert_eq!(totals.paid["a"], dec!(25.00));
    assert!(totals.owed.is_empty());
}

#[test]
fn test_unequal_weights_apportion_proportionally() {
    let expenses = vec![expense("a", dec!(90.00), &[("a", dec!(1)), ("b", dec!(2))])];

    let totals = aggregate(&expenses, &[]);

    assert_eq!(totals.owed["a"], dec!(30));
    assert_eq!(totals.owed["b"], dec!(60));
    assert_eq!(totals.net["a"], dec!(60.00));
    assert_eq!(totals.net["b"], dec!(-60.00));
}

#[test]
fn test_empty_trip_yields_empty_report() {
    let totals = aggregate(&[], &[]);

    assert!(totals.paid.is_empty());
    assert!(totals.owed.is_empty());
    assert!(totals.net.is_empty());
    assert!(plan_transfers(&totals.net).unwrap().is_empty());
}

#[test]
fn test_settlement_only_member_enters_net() {
    let settlements = vec![settlement("d", "a", dec!(10.00), SettlementStatus::Confirmed)];

    let totals = aggregate(&[], &settlements);

    assert_eq!(totals.net["d"], dec!(10.00));
    assert_eq!(totals.net["a"], dec!(-10.00));
}

#[test]
fn test_invalid_settlements_are_skipped_defensively() {
    let expenses = vec![expense("a", dec!(90.00), &[("b", dec!(1))])];
    let mut zero_amount = settlement("b", "a", dec!(0), SettlementStatus::Confirmed);
    zero_amount.id = "set-zero".to_string();
    let mut self_payment = settlement("b", "b", dec!(10.00), SettlementStatus::Confirmed);
    self_payment.id = "set-self".to_string();

    let totals = aggregate(&expenses, &[zero_amount, self_payment]);

    assert_eq!(totals.net["a"], dec!(90.00));
    assert_eq!(totals.net["b"], dec!(-90.00));
}

#[test]
fn test_rounding_residue_is_absorbed() {
    // 100.00 split three ways rounds to 66.67 / -33.33 / -33.33: one
    // cent of dust stays with the creditor and must not fail the plan.
    let expenses = vec![expense(
        "a",
        dec!(100.00),
        &[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))],
    )];

    let totals = aggregate(&expenses, &[]);
    let transfers = plan_transfers(&totals.net).unwrap();

    assert_eq!(
        transfers,
        vec![
            transfer("b", "a", dec!(33.33)),
            transfer("c", "a", dec!(33.33)),
        ]
    );
}

#[test]
fn test_grossly_unbalanced_net_fails_loudly() {
    let net = HashMap::from([
        ("a".to_string(), dec!(100.00)),
        ("b".to_string(), dec!(-1.00)),
    ]);

    let result = plan_transfers(&net);

    assert!(matches!(result, Err(Error::InconsistentLedger(_))));
}

#[test]
fn test_transfer_pairing_is_deterministic() {
    let net = HashMap::from([
        ("c".to_string(), dec!(-30.00)),
        ("a".to_string(), dec!(60.00)),
        ("b".to_string(), dec!(-30.00)),
    ]);

    let first = plan_transfers(&net).unwrap();
    let second = plan_transfers(&net).unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].from_user_id, "b");
    assert_eq!(first[1].from_user_id, "c");
}

#[test]
fn test_chained_debts_collapse() {
    // a paid for b, b paid for c: the chain nets to two transfers.
    let expenses = vec![
        expense("a", dec!(40.00), &[("b", dec!(1))]),
        expense("b", dec!(10.00), &[("c", dec!(1))]),
    ];

    let totals = aggregate(&expenses, &[]);
    let transfers = plan_transfers(&totals.net).unwrap();

    let nonzero = totals.net.values().filter(|v| !v.is_zero()).count();
    assert!(transfers.len() <= nonzero - 1);

    let settled = apply_transfers(&totals.net, &transfers);
    assert!(settled.values().all(|v| v.is_zero()));
}

#[test]
fn test_conservation_for_even_splits() {
    let expenses = vec![
        expense("a", dec!(90.00), &[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))]),
        expense("b", dec!(40.00), &[("a", dec!(1)), ("d", dec!(3))]),
    ];

    let totals = aggregate(&expenses, &[]);

    let sum: Decimal = totals.net.values().sum();
    assert_eq!(sum, Decimal::ZERO);
}

mod facade {
    use super::*;

    struct FixedExpenses(Vec<Expense>);

    #[async_trait]
    impl ExpenseRepositoryTrait for FixedExpenses {
        fn get_expenses_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>> {
            Ok(self
                .0
                .iter()
                .filter(|e| e.trip_id == trip_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, expense: Expense) -> Result<Expense> {
            Ok(expense)
        }

        async fn update(&self, expense: Expense) -> Result<Expense> {
            Ok(expense)
        }
    }

    struct FixedSettlements(Vec<Settlement>);

    #[async_trait]
    impl SettlementRepositoryTrait for FixedSettlements {
        fn get_settlements_by_trip(&self, trip_id: &str) -> Result<Vec<Settlement>> {
            Ok(self
                .0
                .iter()
                .filter(|s| s.trip_id == trip_id)
                .cloned()
                .collect())
        }

        fn get_settlement(&self, settlement_id: &str) -> Result<Option<Settlement>> {
            Ok(self.0.iter().find(|s| s.id == settlement_id).cloned())
        }

        async fn insert(&self, settlement: Settlement) -> Result<Settlement> {
            Ok(settlement)
        }

        async fn update(&self, settlement: Settlement) -> Result<Settlement> {
            Ok(settlement)
        }
    }

    #[test]
    fn test_compute_balance_is_read_only_and_repeatable() {
        let service = BalanceService::new(
            Arc::new(FixedExpenses(vec![expense(
                "a",
                dec!(90.00),
                &[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))],
            )])),
            Arc::new(FixedSettlements(vec![settlement(
                "b",
                "a",
                dec!(30.00),
                SettlementStatus::Confirmed,
            )])),
        );

        let first = service.compute_balance("trip-1").unwrap();
        let second = service.compute_balance("trip-1").unwrap();

        assert_eq!(first.net, second.net);
        assert_eq!(first.transfers, second.transfers);
        assert_eq!(first.transfers, vec![transfer("c", "a", dec!(30.00))]);
    }

    #[test]
    fn test_report_serializes_two_digit_decimal_strings() {
        let service = BalanceService::new(
            Arc::new(FixedExpenses(vec![expense("a", dec!(90.00), &[("b", dec!(1))])])),
            Arc::new(FixedSettlements(vec![])),
        );

        let report = service.compute_balance("trip-1").unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["paid"]["a"], "90.00");
        assert_eq!(json["net"]["b"], "-90.00");
        assert_eq!(json["transfers"][0]["fromUserId"], "b");
        assert_eq!(json["transfers"][0]["amount"], "90.00");
    }

    #[test]
    fn test_unknown_trip_yields_empty_report() {
        let service = BalanceService::new(
            Arc::new(FixedExpenses(vec![])),
            Arc::new(FixedSettlements(vec![])),
        );

        let report = service.compute_balance("trip-404").unwrap();

        assert!(report.paid.is_empty());
        assert!(report.transfers.is_empty());
    }
}

prop_compose! {
    fn arb_expense()(
        payer in 0..6usize,
        cents in 1i64..500_000i64,
        shares in prop::collection::vec((0..6usize, 1i64..5i64), 0..6),
    ) -> Expense {
        let members = ["m0", "m1", "m2", "m3", "m4", "m5"];
        let share_list: Vec<(&str, Decimal)> = shares
            .iter()
            .map(|(idx, weight)| (members[*idx], Decimal::from(*weight)))
            .collect();
        expense(members[payer], Decimal::new(cents, 2), &share_list)
    }
}

proptest! {
    /// Conservation: nets sum to zero up to the documented per-member
    /// rounding residue.
    #[test]
    fn prop_nets_conserve_value(expenses in prop::collection::vec(arb_expense(), 0..12)) {
        let totals = aggregate(&expenses, &[]);

        let sum: Decimal = totals.net.values().sum();
        let tolerance = dec!(0.01) * Decimal::from(totals.net.len());
        prop_assert!(sum.abs() <= tolerance);
    }

    /// Applying every planned transfer drives every balance to zero
    /// (up to absorbed dust), with strictly positive amounts and no more
    /// transfers than members minus one.
    #[test]
    fn prop_transfers_settle_all_balances(expenses in prop::collection::vec(arb_expense(), 0..12)) {
        let totals = aggregate(&expenses, &[]);
        let transfers = plan_transfers(&totals.net).unwrap();

        prop_assert!(transfers.iter().all(|t| t.amount > Decimal::ZERO));

        let nonzero = totals.net.values().filter(|v| !v.is_zero()).count();
        prop_assert!(transfers.len() <= nonzero.saturating_sub(1));

        let settled = apply_transfers(&totals.net, &transfers);
        let dust = dec!(0.01) * Decimal::from(settled.len().max(1));
        for remaining in settled.values() {
            prop_assert!(remaining.abs() <= dust);
        }
    }
}
