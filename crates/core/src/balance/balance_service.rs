use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::balance_model::{BalanceReport, LedgerTotals, Transfer};
use crate::errors::{Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::settlements::{Settlement, SettlementRepositoryTrait};
use crate::utils::decimal_utils::quantize_money;

/// Fold a trip's expenses and confirmed settlements into per-member totals.
///
/// Apportionment accumulates unrounded; rounding happens once per member
/// when `net` is derived, so many shares of the same expense cannot
/// compound rounding error. An expense with no shares (or zero total
/// weight) still credits its payer but is skipped for `owed`.
pub fn aggregate(expenses: &[Expense], settlements: &[Settlement]) -> LedgerTotals {
    let mut paid: HashMap<String, Decimal> = HashMap::new();
    let mut owed: HashMap<String, Decimal> = HashMap::new();

    for expense in expenses {
        *paid
            .entry(expense.payer_id.clone())
            .or_insert(Decimal::ZERO) += expense.amount;

        if expense.shares.is_empty() {
            continue;
        }
        let total_weight = expense.total_share_weight();
        if total_weight <= Decimal::ZERO {
            continue;
        }

        for share in &expense.shares {
            *owed.entry(share.user_id.clone()).or_insert(Decimal::ZERO) +=
                expense.amount * share.weight / total_weight;
        }
    }

    let mut net: HashMap<String, Decimal> = HashMap::new();
    for member in paid.keys().chain(owed.keys()) {
        if net.contains_key(member) {
            continue;
        }
        let paid_total = paid.get(member).copied().unwrap_or(Decimal::ZERO);
        let owed_total = owed.get(member).copied().unwrap_or(Decimal::ZERO);
        net.insert(member.clone(), quantize_money(paid_total - owed_total));
    }

    // A confirmed repayment reduces the payer's debt and the receiver's
    // credit. A member who repaid without ever recording an expense still
    // enters the net map.
    for settlement in settlements {
        if !settlement.is_confirmed() {
            continue;
        }
        let amount = quantize_money(settlement.amount);
        if amount <= Decimal::ZERO || settlement.from_user_id == settlement.to_user_id {
            log::warn!(
                "skipping invalid settlement {} in trip {}",
                settlement.id,
                settlement.trip_id
            );
            continue;
        }

        let from = net
            .entry(settlement.from_user_id.clone())
            .or_insert(Decimal::ZERO);
        *from = quantize_money(*from + amount);
        let to = net
            .entry(settlement.to_user_id.clone())
            .or_insert(Decimal::ZERO);
        *to = quantize_money(*to - amount);
    }

    LedgerTotals { paid, owed, net }
}

/// Greedy single-pass netting: pair off debtors against creditors until
/// every balance reaches zero.
///
/// Members are sorted by id before partitioning so the pairing is
/// reproducible. Produces at most (non-zero-net members - 1) transfers,
/// the optimum for single-currency netting.
pub fn plan_transfers(net: &HashMap<String, Decimal>) -> Result<Vec<Transfer>> {
    let mut members: Vec<&String> = net.keys().collect();
    members.sort();

    let mut debtors: Vec<(String, Decimal)> = Vec::new();
    let mut creditors: Vec<(String, Decimal)> = Vec::new();
    for member in members {
        // Quantize before partitioning: a sub-cent magnitude would emit
        // nothing yet never advance its cursor.
        let value = quantize_money(net[member]);
        if value < Decimal::ZERO {
            debtors.push((member.clone(), -value));
        } else if value > Decimal::ZERO {
            creditors.push((member.clone(), value));
        }
    }

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < debtors.len() && j < creditors.len() {
        let x = quantize_money(debtors[i].1.min(creditors[j].1));
        if x > Decimal::ZERO {
            transfers.push(Transfer {
                from_user_id: debtors[i].0.clone(),
                to_user_id: creditors[j].0.clone(),
                amount: x,
            });
        }

        debtors[i].1 = quantize_money(debtors[i].1 - x);
        creditors[j].1 = quantize_money(creditors[j].1 - x);

        // Both cursors advance in the same step when amounts tie exactly.
        if debtors[i].1 == Decimal::ZERO {
            i += 1;
        }
        if creditors[j].1 == Decimal::ZERO {
            j += 1;
        }
    }

    // Per-member rounding of apportioned thirds can leave sub-cent dust
    // on one side; anything beyond one cent per netted member means the
    // upstream aggregation is broken and must not be papered over.
    let leftover: Decimal = debtors[i..]
        .iter()
        .chain(creditors[j..].iter())
        .map(|(_, remaining)| *remaining)
        .sum();
    let tolerance = Decimal::new(1, 2) * Decimal::from(debtors.len() + creditors.len());
    if leftover > tolerance {
        return Err(Error::InconsistentLedger(format!(
            "unmatched balance of {} left after netting",
            leftover
        )));
    }
    if leftover > Decimal::ZERO {
        log::debug!("absorbing rounding residue of {} after netting", leftover);
    }

    Ok(transfers)
}

/// Balance & settlement engine facade.
///
/// Read-only over the persisted expense and settlement history:
/// idempotent, recomputed from source records on every call. Netting
/// operates on amounts as recorded; a trip that mixes currencies nets
/// them at face value, while the normalized `amount_home` values feed
/// the stats path instead.
pub struct BalanceService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    settlement_repository: Arc<dyn SettlementRepositoryTrait>,
}

impl BalanceService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        settlement_repository: Arc<dyn SettlementRepositoryTrait>,
    ) -> Self {
        BalanceService {
            expense_repository,
            settlement_repository,
        }
    }

    pub fn compute_balance(&self, trip_id: &str) -> Result<BalanceReport> {
        let expenses = self.expense_repository.get_expenses_by_trip(trip_id)?;
        let settlements = self.settlement_repository.get_settlements_by_trip(trip_id)?;

        let totals = aggregate(&expenses, &settlements);
        let transfers = plan_transfers(&totals.net)?;

        Ok(BalanceReport {
            paid: quantize_map(totals.paid),
            owed: quantize_map(totals.owed),
            net: totals.net,
            transfers,
        })
    }
}

fn quantize_map(map: HashMap<String, Decimal>) -> HashMap<String, Decimal> {
    map.into_iter()
        .map(|(member, value)| (member, quantize_money(value)))
        .collect()
}
