use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::settlements_errors::SettlementError;
use crate::utils::decimal_utils::serialize_money;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Pending,
    Confirmed,
}

/// A directed repayment between two members of the same trip.
///
/// Created `pending`; transitions once, irreversibly, to `confirmed`
/// when the receiving member confirms. No other transitions exist.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub id: String,
    pub trip_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    #[serde(serialize_with = "serialize_money")]
    pub amount: Decimal,
    pub currency: String,
    pub status: SettlementStatus,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl Settlement {
    pub fn is_confirmed(&self) -> bool {
        self.status == SettlementStatus::Confirmed
    }

    /// The single place the pending -> confirmed transition happens.
    ///
    /// The store must apply the resulting row atomically so two
    /// concurrent confirmations cannot both succeed.
    pub fn confirm(&mut self, at: DateTime<Utc>) -> Result<(), SettlementError> {
        if self.is_confirmed() {
            return Err(SettlementError::AlreadyConfirmed(self.id.clone()));
        }
        self.status = SettlementStatus::Confirmed;
        self.confirmed_at = Some(at);
        Ok(())
    }
}

/// Write-side payload for a new settlement.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSettlement {
    pub trip_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub amount: Decimal,
    pub currency: String,
}

impl NewSettlement {
    pub fn validate(&self) -> Result<(), SettlementError> {
        if self.from_user_id == self.to_user_id {
            return Err(SettlementError::SamePayerAndReceiver);
        }
        if self.amount <= Decimal::ZERO {
            return Err(SettlementError::InvalidAmount);
        }
        Ok(())
    }
}
