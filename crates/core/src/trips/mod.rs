//! Trips module - trip and membership models.

mod trips_model;
mod trips_traits;


pub use trips_model::{is_member, MemberRole, Trip, TripMember, TripScoped};
pub use trips_traits::TripMemberRepositoryTrait;
