//! Rate provider trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::RateProviderError;
use crate::models::{CurrencyDirectory, DailyRates};

/// Trait for exchange-rate providers.
///
/// Implement this trait to add support for a new rate source. A provider
/// is a thin fetch layer: it performs one bounded network call per
/// operation and reports transport or decode failures without retrying.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "OPEN_EXCHANGE_RATES".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the full pivot-relative rate sheet for `date`.
    ///
    /// Returns every currency the provider quoted that day. The caller is
    /// responsible for deciding which entries it needs and for caching.
    async fn fetch_daily_rates(&self, date: NaiveDate) -> Result<DailyRates, RateProviderError>;

    /// Fetch the provider-wide directory of supported currencies.
    async fn fetch_currency_directory(&self) -> Result<CurrencyDirectory, RateProviderError>;
}
