//! SeaORM adapters - raw queries and mutations, generic over `ConnectionTrait`.
//!
//! Adapter functions return `DbErr`; the repos layer maps to `DomainError`
//! via `From<DbErr>`.

pub mod clubs_sea;
pub mod competitions_sea;
pub mod games_sea;
pub mod players_sea;
pub mod registrations_sea;
pub mod rosters_sea;
