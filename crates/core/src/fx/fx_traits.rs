use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::fx_model::ExchangeRate;
use crate::errors::Result;
use tripsplit_rates::CurrencyDirectory;

/// Trait defining the contract for the rate cache store.
///
/// The store is process-wide and trip-independent. Concurrent misses for
/// the same key may race to fetch and write; all writers compute the same
/// deterministic value for a given key, so `upsert` must tolerate
/// duplicate writes with an identical logical key instead of requiring
/// mutual exclusion.
pub trait FxRateStoreTrait: Send + Sync {
    fn get(&self, currency: &str, date: NaiveDate) -> Result<Option<ExchangeRate>>;
    fn upsert(&self, entry: ExchangeRate) -> Result<()>;
}

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Resolve the rate converting one unit of `currency` into the home
    /// currency on `date`.
    async fn rate_to_home(&self, currency: &str, date: NaiveDate) -> Result<Decimal>;

    /// Convert `amount` of `currency` into the home currency on `date`,
    /// quantized to 2 fractional digits.
    async fn convert_to_home(
        &self,
        amount: Decimal,
        currency: &str,
        date: NaiveDate,
    ) -> Result<Decimal>;

    /// Provider-wide directory of supported currencies, cached for 24 hours.
    async fn list_supported_currencies(&self) -> Result<CurrencyDirectory>;
}
