use async_trait::async_trait;

use crate::errors::Result;
use crate::settlements::settlements_model::{NewSettlement, Settlement};

/// Trait for settlement repository operations.
#[async_trait]
pub trait SettlementRepositoryTrait: Send + Sync {
    fn get_settlements_by_trip(&self, trip_id: &str) -> Result<Vec<Settlement>>;
    fn get_settlement(&self, settlement_id: &str) -> Result<Option<Settlement>>;
    async fn insert(&self, settlement: Settlement) -> Result<Settlement>;
    async fn update(&self, settlement: Settlement) -> Result<Settlement>;
}

/// Trait for settlement service operations.
#[async_trait]
pub trait SettlementServiceTrait: Send + Sync {
    fn get_settlements(&self, trip_id: &str) -> Result<Vec<Settlement>>;
    async fn create_settlement(&self, new_settlement: NewSettlement) -> Result<Settlement>;
    async fn confirm_settlement(&self, settlement_id: &str, acting_user_id: &str)
        -> Result<Settlement>;
}
