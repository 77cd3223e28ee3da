//! Row factories for integration tests.
//!
//! Everything inserts through the entity layer directly, bypassing the
//! services, so tests can arrange exactly the store they need. The one
//! deliberate exception is registration state: tests that care about the
//! `registered` projection should go through `RegistrationService` so the
//! tracker is exercised; `create_test_mapping` exists precisely to create
//! an inconsistent row when a test needs one.

use backend::entities::games::GameStatus;
use backend::entities::registration_mappings::SyncStatus;
use backend::entities::{clubs, competitions, games, players, registration_mappings, teams};
use backend::AppError;
use backend_test_support::unique_helpers::{unique_str, unique_twizzit_id};
use sea_orm::{ActiveModelTrait, ConnectionTrait, NotSet, Set};
use time::OffsetDateTime;

pub async fn create_test_club(conn: &impl ConnectionTrait) -> Result<i64, AppError> {
    let now = OffsetDateTime::now_utc();
    let club = clubs::ActiveModel {
        id: NotSet,
        name: Set(unique_str("club")),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(club.insert(conn).await?.id)
}

pub async fn create_test_team(
    conn: &impl ConnectionTrait,
    club_id: i64,
) -> Result<i64, AppError> {
    let now = OffsetDateTime::now_utc();
    let team = teams::ActiveModel {
        id: NotSet,
        club_id: Set(club_id),
        name: Set(unique_str("team")),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(team.insert(conn).await?.id)
}

pub async fn create_test_competition(
    conn: &impl ConnectionTrait,
    is_official: bool,
) -> Result<i64, AppError> {
    let now = OffsetDateTime::now_utc();
    let competition = competitions::ActiveModel {
        id: NotSet,
        name: Set(unique_str("competition")),
        season: Set("2025-2026".to_string()),
        is_official: Set(is_official),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(competition.insert(conn).await?.id)
}

pub async fn create_test_game(
    conn: &impl ConnectionTrait,
    home_club_id: i64,
    away_club_id: i64,
    competition_id: Option<i64>,
) -> Result<i64, AppError> {
    let now = OffsetDateTime::now_utc();
    let game = games::ActiveModel {
        id: NotSet,
        home_club_id: Set(home_club_id),
        away_club_id: Set(away_club_id),
        competition_id: Set(competition_id),
        status: Set(GameStatus::Scheduled),
        scheduled_at: Set(Some(now)),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(game.insert(conn).await?.id)
}

pub async fn create_test_player(
    conn: &impl ConnectionTrait,
    club_id: i64,
    first_name: &str,
) -> Result<i64, AppError> {
    let now = OffsetDateTime::now_utc();
    let player = players::ActiveModel {
        id: NotSet,
        club_id: Set(club_id),
        team_id: Set(None),
        first_name: Set(first_name.to_string()),
        last_name: Set(unique_str("player")),
        jersey_number: Set(None),
        registered: Set(false),
        verified_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(player.insert(conn).await?.id)
}

/// Raw mapping insert that deliberately bypasses the registration tracker.
pub async fn create_test_mapping(
    conn: &impl ConnectionTrait,
    player_id: i64,
) -> Result<i64, AppError> {
    let now = OffsetDateTime::now_utc();
    let mapping = registration_mappings::ActiveModel {
        id: NotSet,
        player_id: Set(player_id),
        twizzit_id: Set(unique_twizzit_id()),
        twizzit_name: Set(unique_str("twizzit-member")),
        sync_status: Set(SyncStatus::Success),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(mapping.insert(conn).await?.id)
}
