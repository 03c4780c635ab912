use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::expenses_model::{Expense, ExpenseShare, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::{Error, Result};
use crate::fx::FxServiceTrait;
use crate::utils::decimal_utils::quantize_money;

/// Expense write path.
///
/// Creation and update both normalize through the fx service: the rate
/// for the spend date and the home-currency amount are stamped on the
/// row alongside the original amount and currency.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    fx: Arc<dyn FxServiceTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>, fx: Arc<dyn FxServiceTrait>) -> Self {
        ExpenseService { repository, fx }
    }

    fn validate(amount: Decimal, shares: &[ExpenseShare]) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation("amount must be > 0".to_string()));
        }
        if shares.iter().any(|s| s.weight <= Decimal::ZERO) {
            return Err(Error::Validation(
                "share weight must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, trip_id: &str) -> Result<Vec<Expense>> {
        self.repository.get_expenses_by_trip(trip_id)
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        Self::validate(new_expense.amount, &new_expense.shares)?;

        let fx_date = Expense::fx_date(new_expense.spent_at);
        let rate = self.fx.rate_to_home(&new_expense.currency, fx_date).await?;

        let amount = quantize_money(new_expense.amount);
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            trip_id: new_expense.trip_id,
            payer_id: new_expense.payer_id,
            title: new_expense.title,
            amount,
            currency: new_expense.currency.to_uppercase(),
            category: new_expense.category,
            spent_at: new_expense.spent_at,
            fx_rate: Some(rate),
            amount_home: Some(quantize_money(amount * rate)),
            created_at: Utc::now(),
            shares: new_expense.shares,
        };

        self.repository.insert(expense).await
    }

    async fn update_expense(&self, expense: Expense) -> Result<Expense> {
        Self::validate(expense.amount, &expense.shares)?;

        // Amount, currency, or spend date may have changed; re-derive the
        // normalized fields before persisting.
        let fx_date = Expense::fx_date(expense.spent_at);
        let rate = self.fx.rate_to_home(&expense.currency, fx_date).await?;

        let mut expense = expense;
        expense.currency = expense.currency.to_uppercase();
        expense.amount = quantize_money(expense.amount);
        expense.fx_rate = Some(rate);
        expense.amount_home = Some(quantize_money(expense.amount * rate));

        self.repository.update(expense).await
    }
}
