//! Tripsplit Rates - exchange-rate provider clients.
//!
//! This crate owns the outbound seam to external rate sources. It knows
//! nothing about trips, expenses, or caching: the core crate decides when
//! to call a provider and what to do with the result.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RateProviderError;
pub use models::{CurrencyDirectory, DailyRates};
pub use provider::{OpenExchangeRatesProvider, RateProvider};
