//! Open Exchange Rates provider.
//!
//! Historical day sheets are quoted against USD on every plan tier, so the
//! pivot currency is always USD here.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::RateProviderError;
use crate::models::{CurrencyDirectory, DailyRates};
use crate::provider::traits::RateProvider;

const PROVIDER_ID: &str = "OPEN_EXCHANGE_RATES";
const HISTORICAL_URL: &str = "https://openexchangerates.org/api/historical";
const CURRENCIES_URL: &str = "https://openexchangerates.org/api/currencies.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize, Debug)]
struct HistoricalResponse {
    base: String,
    rates: HashMap<String, Decimal>,
}

pub struct OpenExchangeRatesProvider {
    api_key: String,
    client: reqwest::Client,
}

impl OpenExchangeRatesProvider {
    pub fn new(api_key: String) -> Self {
        OpenExchangeRatesProvider {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn map_transport_error(&self, err: reqwest::Error) -> RateProviderError {
        if err.is_timeout() {
            RateProviderError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            RateProviderError::Network(err)
        }
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, RateProviderError> {
        let response = self
            .client
            .get(url)
            .query(&[("app_id", self.api_key.as_str())])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateProviderError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl RateProvider for OpenExchangeRatesProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_daily_rates(&self, date: NaiveDate) -> Result<DailyRates, RateProviderError> {
        let url = format!("{}/{}.json", HISTORICAL_URL, date.format("%Y-%m-%d"));

        let response = self.get_checked(&url).await?;
        let body = response
            .json::<HistoricalResponse>()
            .await
            .map_err(|e| RateProviderError::InvalidResponse {
                message: e.to_string(),
            })?;

        log::debug!(
            "{}: fetched {} rates for {} (base {})",
            PROVIDER_ID,
            body.rates.len(),
            date,
            body.base
        );

        Ok(DailyRates {
            date,
            base: body.base,
            rates: body.rates,
        })
    }

    async fn fetch_currency_directory(&self) -> Result<CurrencyDirectory, RateProviderError> {
        let response = self.get_checked(CURRENCIES_URL).await?;
        response
            .json::<CurrencyDirectory>()
            .await
            .map_err(|e| RateProviderError::InvalidResponse {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = OpenExchangeRatesProvider::new("test-key".to_string());
        assert_eq!(provider.id(), "OPEN_EXCHANGE_RATES");
    }
}
