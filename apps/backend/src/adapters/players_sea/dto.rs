//! DTOs for players_sea adapter.

/// DTO for creating a new player. The registration projection always starts
/// false; it is only ever advanced by the registration tracker.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub club_id: i64,
    pub team_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i16>,
}

/// DTO for persisting a player's registration projection.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSetRegistration {
    pub player_id: i64,
    pub registered: bool,
    pub verified_at: Option<time::OffsetDateTime>,
}
