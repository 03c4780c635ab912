//! Expenses module - domain models, services, and traits.

mod expenses_model;
mod expenses_service;
mod expenses_traits;


pub use expenses_model::{Expense, ExpenseShare, NewExpense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
