//! Stats module - home-currency reporting over a trip's expenses.

mod stats_model;
mod stats_service;

pub use stats_model::{CategoryTotal, MemberTotal, TripStats};
pub use stats_service::StatsService;
