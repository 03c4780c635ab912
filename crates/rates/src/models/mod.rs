//! Data models shared by rate providers.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency code -> display name, as published by the provider.
pub type CurrencyDirectory = HashMap<String, String>;

/// One day's exchange-rate sheet, quoted relative to the provider's
/// pivot currency.
///
/// `rates` maps a currency code to the amount of that currency one unit
/// of the pivot buys on `date`. The pivot itself appears in the map with
/// a rate of 1.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DailyRates {
    pub date: NaiveDate,
    /// The pivot currency the quotes are relative to.
    pub base: String,
    pub rates: HashMap<String, Decimal>,
}

impl DailyRates {
    /// Pivot-relative rate for `currency`, if the provider quoted it that day.
    pub fn rate_for(&self, currency: &str) -> Option<Decimal> {
        self.rates.get(currency).copied()
    }
}
