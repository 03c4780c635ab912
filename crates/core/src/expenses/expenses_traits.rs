use async_trait::async_trait;

use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};

/// Trait for expense repository operations.
///
/// `get_expenses_by_trip` must return the full expense history of the
/// trip, shares included, read-consistent at a single point in time.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn get_expenses_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>>;
    async fn insert(&self, expense: Expense) -> Result<Expense>;
    async fn update(&self, expense: Expense) -> Result<Expense>;
}

/// Trait for expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, trip_id: &str) -> Result<Vec<Expense>>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense: Expense) -> Result<Expense>;
}
