//! FX (Foreign Exchange) module - domain models, services, and traits.

mod fx_cache;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;


pub use fx_cache::InMemoryRateStore;
pub use fx_errors::FxError;
pub use fx_model::ExchangeRate;
pub use fx_service::FxService;
pub use fx_traits::{FxRateStoreTrait, FxServiceTrait};
