//! Rate provider implementations.

mod open_exchange;
mod traits;

pub use open_exchange::OpenExchangeRatesProvider;
pub use traits::RateProvider;
