use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use super::fx_traits::{FxRateStoreTrait, FxServiceTrait};
use crate::constants::CURRENCY_DIRECTORY_TTL_HOURS;
use crate::errors::Result;
use crate::utils::decimal_utils::{quantize_money, quantize_rate};
use tripsplit_rates::{CurrencyDirectory, DailyRates, RateProvider};

/// Currency normalizer: turns (amount, currency, date) into home-currency
/// amounts through the rate cache, falling back to the external provider
/// on a miss.
pub struct FxService {
    store: Arc<dyn FxRateStoreTrait>,
    provider: Arc<dyn RateProvider>,
    home_currency: String,
    directory_cache: RwLock<Option<(DateTime<Utc>, CurrencyDirectory)>>,
}

impl FxService {
    pub fn new(
        store: Arc<dyn FxRateStoreTrait>,
        provider: Arc<dyn RateProvider>,
        home_currency: String,
    ) -> Self {
        FxService {
            store,
            provider,
            home_currency: home_currency.to_uppercase(),
            directory_cache: RwLock::new(None),
        }
    }

    pub fn home_currency(&self) -> &str {
        &self.home_currency
    }

    /// Compute the cross rate for `currency` from a provider day sheet.
    ///
    /// The sheet must quote the pivot itself, the home currency, and the
    /// target, or the data is unusable and nothing may be cached.
    fn cross_rate(&self, sheet: &DailyRates, currency: &str) -> std::result::Result<Decimal, FxError> {
        let missing = |code: &str| {
            FxError::InvalidRateData(format!(
                "provider sheet for {} is missing {}",
                sheet.date, code
            ))
        };

        sheet
            .rate_for(&sheet.base)
            .ok_or_else(|| missing(&sheet.base))?;
        let pivot_to_home = sheet
            .rate_for(&self.home_currency)
            .ok_or_else(|| missing(&self.home_currency))?;
        let pivot_to_target = sheet.rate_for(currency).ok_or_else(|| missing(currency))?;

        if pivot_to_target.is_zero() {
            return Err(FxError::InvalidRateData(format!(
                "zero pivot rate for {} on {}",
                currency, sheet.date
            )));
        }

        Ok(quantize_rate((Decimal::ONE / pivot_to_target) * pivot_to_home))
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn rate_to_home(&self, currency: &str, date: NaiveDate) -> Result<Decimal> {
        let currency = currency.to_uppercase();
        if currency == self.home_currency {
            return Ok(Decimal::ONE);
        }

        if let Some(entry) = self.store.get(&currency, date)? {
            return Ok(entry.rate_to_home);
        }

        log::debug!(
            "fx cache miss for {}/{}, fetching from provider",
            currency,
            date
        );
        let sheet = self
            .provider
            .fetch_daily_rates(date)
            .await
            .map_err(FxError::from_provider)?;

        let rate = self.cross_rate(&sheet, &currency)?;

        // Concurrent misses may both reach this point; the upsert is
        // idempotent for an identical logical key.
        self.store.upsert(ExchangeRate::new(currency, date, rate))?;

        Ok(rate)
    }

    async fn convert_to_home(
        &self,
        amount: Decimal,
        currency: &str,
        date: NaiveDate,
    ) -> Result<Decimal> {
        let rate = self.rate_to_home(currency, date).await?;
        Ok(quantize_money(amount * rate))
    }

    async fn list_supported_currencies(&self) -> Result<CurrencyDirectory> {
        let ttl = Duration::hours(CURRENCY_DIRECTORY_TTL_HOURS);

        if let Ok(cache) = self.directory_cache.read() {
            if let Some((fetched_at, directory)) = &*cache {
                if Utc::now() - *fetched_at < ttl {
                    return Ok(directory.clone());
                }
            }
        }

        let directory = self
            .provider
            .fetch_currency_directory()
            .await
            .map_err(FxError::from_provider)?;

        let mut cache = self
            .directory_cache
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        *cache = Some((Utc::now(), directory.clone()));

        Ok(directory)
    }
}
