//! DTOs for rosters_sea adapter.

/// DTO for creating one roster entry.
#[derive(Debug, Clone)]
pub struct RosterEntryCreate {
    pub game_id: i64,
    pub club_id: i64,
    pub player_id: i64,
    pub is_captain: bool,
}
