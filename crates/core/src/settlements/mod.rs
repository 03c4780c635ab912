//! Settlements module - repayments between trip members.

mod settlements_errors;
mod settlements_model;
mod settlements_service;
mod settlements_traits;


pub use settlements_errors::SettlementError;
pub use settlements_model::{NewSettlement, Settlement, SettlementStatus};
pub use settlements_service::SettlementService;
pub use settlements_traits::{SettlementRepositoryTrait, SettlementServiceTrait};
