use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_utils::{serialize_money, serialize_opt_money, serialize_opt_rate};

/// One member's proportional claim on an expense.
///
/// Weights default to 1; unequal splits raise individual weights. The
/// owed amount is `expense.amount * weight / sum(weights)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseShare {
    pub user_id: String,
    #[serde(default = "default_weight")]
    pub weight: Decimal,
}

fn default_weight() -> Decimal {
    Decimal::ONE
}

/// An expense fronted by one member on behalf of a set of members.
///
/// `fx_rate` and `amount_home` are stamped at write time by the expense
/// service; the balance engine itself works on the raw `amount`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub trip_id: String,
    pub payer_id: String,
    pub title: String,
    #[serde(serialize_with = "serialize_money")]
    pub amount: Decimal,
    pub currency: String,
    pub category: Option<String>,
    pub spent_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "serialize_opt_rate")]
    pub fx_rate: Option<Decimal>,
    #[serde(serialize_with = "serialize_opt_money")]
    pub amount_home: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub shares: Vec<ExpenseShare>,
}

impl Expense {
    /// Sum of share weights. Zero when the expense has no shares (or
    /// only zero weights); such an expense counts toward `paid` but is
    /// skipped for apportionment.
    pub fn total_share_weight(&self) -> Decimal {
        self.shares.iter().map(|s| s.weight).sum()
    }

    /// The calendar date used for rate lookups: the spend date when
    /// recorded, otherwise today.
    pub fn fx_date(spent_at: Option<DateTime<Utc>>) -> NaiveDate {
        spent_at
            .map(|t| t.date_naive())
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Write-side payload for a new expense.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub trip_id: String,
    pub payer_id: String,
    pub title: String,
    pub amount: Decimal,
    pub currency: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub spent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shares: Vec<ExpenseShare>,
}
