use crate::errors::Result;
use crate::trips::TripMember;

/// Trait for trip membership lookups.
pub trait TripMemberRepositoryTrait: Send + Sync {
    fn members_of(&self, trip_id: &str) -> Result<Vec<TripMember>>;
}
