use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::decimal_utils::{serialize_money, serialize_money_map};

/// Per-member totals derived from a trip's full history.
///
/// `paid` and `owed` are observability output; `net` is the authoritative
/// input to transfer planning. Positive net means the member is owed
/// money, negative means the member owes.
#[derive(Debug, Clone, Default)]
pub struct LedgerTotals {
    pub paid: HashMap<String, Decimal>,
    pub owed: HashMap<String, Decimal>,
    pub net: HashMap<String, Decimal>,
}

/// A suggested payment from a net-debtor to a net-creditor.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub from_user_id: String,
    pub to_user_id: String,
    #[serde(serialize_with = "serialize_money")]
    pub amount: Decimal,
}

/// The balance engine's answer for one trip.
///
/// Monetary maps serialize as decimal strings with exactly 2 fractional
/// digits, keyed by member id.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    #[serde(serialize_with = "serialize_money_map")]
    pub paid: HashMap<String, Decimal>,
    #[serde(serialize_with = "serialize_money_map")]
    pub owed: HashMap<String, Decimal>,
    #[serde(serialize_with = "serialize_money_map")]
    pub net: HashMap<String, Decimal>,
    pub transfers: Vec<Transfer>,
}
