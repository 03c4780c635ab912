use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::decimal_utils::serialize_money;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    #[serde(serialize_with = "serialize_money")]
    pub amount: Decimal,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTotal {
    pub user_id: String,
    #[serde(serialize_with = "serialize_money")]
    pub amount: Decimal,
}

/// Spending rollup for one trip, expressed in the home currency.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TripStats {
    #[serde(serialize_with = "serialize_money")]
    pub total: Decimal,
    pub by_category: Vec<CategoryTotal>,
    pub by_member: Vec<MemberTotal>,
}
