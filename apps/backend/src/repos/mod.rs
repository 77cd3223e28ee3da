//! Repository layer - domain models and free functions generic over
//! `ConnectionTrait`, translating `DbErr` into `DomainError`.

pub mod clubs;
pub mod competitions;
pub mod games;
pub mod players;
pub mod registrations;
pub mod rosters;
