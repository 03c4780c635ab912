use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::trips_traits::TripMemberRepositoryTrait;
use crate::errors::Result;

/// A shared trip. The core only needs its identity; the descriptive
/// fields ride along for the reporting path.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub owner_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberRole {
    Owner,
    Member,
}

/// A user's participation record within one trip.
///
/// At most one membership row exists per (trip, user); the store enforces
/// the uniqueness, the core relies on it.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TripMember {
    pub trip_id: String,
    pub user_id: String,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

/// The owning-entity shapes a membership check can be asked about.
///
/// Every access-controlled object resolves to exactly one trip; the
/// variant makes that resolution explicit instead of probing attributes
/// at runtime.
#[derive(Debug, Clone)]
pub enum TripScoped {
    Trip { trip_id: String },
    Expense { trip_id: String },
    Settlement { trip_id: String },
}

impl TripScoped {
    pub fn trip_id(&self) -> &str {
        match self {
            TripScoped::Trip { trip_id }
            | TripScoped::Expense { trip_id }
            | TripScoped::Settlement { trip_id } => trip_id,
        }
    }
}

/// Membership predicate: does `user_id` participate in the trip that owns
/// `scoped`? Called by the API layer before any core computation.
pub fn is_member(
    repository: &dyn TripMemberRepositoryTrait,
    scoped: &TripScoped,
    user_id: &str,
) -> Result<bool> {
    let members = repository.members_of(scoped.trip_id())?;
    Ok(members.iter().any(|m| m.user_id == user_id))
}
