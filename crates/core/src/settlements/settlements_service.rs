use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::settlements_errors::SettlementError;
use super::settlements_model::{NewSettlement, Settlement, SettlementStatus};
use super::settlements_traits::{SettlementRepositoryTrait, SettlementServiceTrait};
use crate::errors::Result;
use crate::utils::decimal_utils::quantize_money;

pub struct SettlementService {
    repository: Arc<dyn SettlementRepositoryTrait>,
}

impl SettlementService {
    pub fn new(repository: Arc<dyn SettlementRepositoryTrait>) -> Self {
        SettlementService { repository }
    }
}

#[async_trait]
impl SettlementServiceTrait for SettlementService {
    fn get_settlements(&self, trip_id: &str) -> Result<Vec<Settlement>> {
        self.repository.get_settlements_by_trip(trip_id)
    }

    async fn create_settlement(&self, new_settlement: NewSettlement) -> Result<Settlement> {
        new_settlement.validate()?;

        let settlement = Settlement {
            id: Uuid::new_v4().to_string(),
            trip_id: new_settlement.trip_id,
            from_user_id: new_settlement.from_user_id,
            to_user_id: new_settlement.to_user_id,
            amount: quantize_money(new_settlement.amount),
            currency: new_settlement.currency.to_uppercase(),
            status: SettlementStatus::Pending,
            created_at: Utc::now(),
            confirmed_at: None,
        };

        self.repository.insert(settlement).await
    }

    async fn confirm_settlement(
        &self,
        settlement_id: &str,
        acting_user_id: &str,
    ) -> Result<Settlement> {
        let mut settlement = self
            .repository
            .get_settlement(settlement_id)?
            .ok_or_else(|| SettlementError::NotFound(settlement_id.to_string()))?;

        // Only the member being repaid can acknowledge the repayment.
        if settlement.to_user_id != acting_user_id {
            return Err(SettlementError::NotReceiver.into());
        }

        settlement.confirm(Utc::now())?;
        self.repository.update(settlement).await
    }
}
