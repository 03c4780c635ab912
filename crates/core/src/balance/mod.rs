//! Balance & settlement engine.
//!
//! Turns a trip's expense history (with proportional shares) and its
//! confirmed repayments into per-member net positions and a minimal list
//! of suggested transfers.

mod balance_model;
mod balance_service;

#[cfg(test)]
mod balance_service_tests;

pub use balance_model::{BalanceReport, LedgerTotals, Transfer};
pub use balance_service::{aggregate, plan_transfers, BalanceService};
