use chrono::NaiveDate;
use dashmap::DashMap;
use rust_decimal::Decimal;

use super::fx_model::ExchangeRate;
use super::fx_traits::FxRateStoreTrait;
use crate::errors::Result;

/// Process-wide in-memory rate cache.
///
/// Write-once per key, read many. Duplicate upserts for the same
/// (currency, date) key overwrite with an equal value, so no lock is held
/// around the provider call that produces the entry.
#[derive(Default)]
pub struct InMemoryRateStore {
    rates: DashMap<(String, NaiveDate), Decimal>,
}

impl InMemoryRateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FxRateStoreTrait for InMemoryRateStore {
    fn get(&self, currency: &str, date: NaiveDate) -> Result<Option<ExchangeRate>> {
        Ok(self
            .rates
            .get(&(currency.to_string(), date))
            .map(|entry| ExchangeRate::new(currency.to_string(), date, *entry)))
    }

    fn upsert(&self, entry: ExchangeRate) -> Result<()> {
        self.rates
            .insert((entry.currency, entry.date), entry.rate_to_home);
        Ok(())
    }
}
