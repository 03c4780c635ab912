use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::stats_model::{CategoryTotal, MemberTotal, TripStats};
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::utils::decimal_utils::quantize_money;

const UNCATEGORIZED: &str = "Uncategorized";

/// Reporting path: unlike the balance engine, stats roll up the
/// NORMALIZED home-currency amounts, so mixed-currency trips compare
/// like with like. Rows written before normalization existed fall back
/// to their raw amount.
pub struct StatsService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl StatsService {
    pub fn new(expense_repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        StatsService { expense_repository }
    }

    pub fn compute_stats(&self, trip_id: &str) -> Result<TripStats> {
        let expenses = self.expense_repository.get_expenses_by_trip(trip_id)?;

        let mut total = Decimal::ZERO;
        let mut by_category: HashMap<String, Decimal> = HashMap::new();
        let mut by_member: HashMap<String, Decimal> = HashMap::new();

        for expense in &expenses {
            let amount = expense.amount_home.unwrap_or(expense.amount);
            let category = expense
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());

            total += amount;
            *by_category.entry(category).or_insert(Decimal::ZERO) += amount;
            *by_member
                .entry(expense.payer_id.clone())
                .or_insert(Decimal::ZERO) += amount;
        }

        let mut by_category: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                amount: quantize_money(amount),
            })
            .collect();
        by_category.sort_by(|a, b| a.category.cmp(&b.category));

        let mut by_member: Vec<MemberTotal> = by_member
            .into_iter()
            .map(|(user_id, amount)| MemberTotal {
                user_id,
                amount: quantize_money(amount),
            })
            .collect();
        by_member.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        Ok(TripStats {
            total: quantize_money(total),
            by_category,
            by_member,
        })
    }
}
