use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::decimal_utils::quantize_rate;

/// A resolved (currency, date) -> rate-to-home fact.
///
/// Immutable once written: rate entries are historical facts about a
/// given date and are never evicted or revised.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub currency: String,
    pub date: NaiveDate,
    #[serde(
        deserialize_with = "deserialize_rate",
        serialize_with = "serialize_rate"
    )]
    pub rate_to_home: Decimal,
}

impl ExchangeRate {
    pub fn new(currency: String, date: NaiveDate, rate_to_home: Decimal) -> Self {
        ExchangeRate {
            currency,
            date,
            rate_to_home: quantize_rate(rate_to_home),
        }
    }
}

fn deserialize_rate<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let decimal = <Decimal as Deserialize>::deserialize(deserializer)?;
    // Exchange rates carry 6 decimal places
    Ok(quantize_rate(decimal))
}

fn serialize_rate<S>(rate: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    crate::utils::decimal_utils::format_rate(*rate).serialize(serializer)
}
