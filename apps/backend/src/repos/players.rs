//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::players_sea as players_adapter;
use crate::domain::registration::RegistrationStatus;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub club_id: i64,
    pub team_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i16>,
    /// Current registration projection (maintained by the tracker).
    pub registration: RegistrationStatus,
    pub created_at: OffsetDateTime,
}

/// New-player input for creation.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub club_id: i64,
    pub team_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i16>,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let player = players_adapter::find_by_id(conn, player_id).await?;
    Ok(player.map(Player::from))
}

/// Fetch every player named in `player_ids` in one query.
/// Missing ids are simply absent from the result; callers decide whether
/// that is an error.
pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_by_ids(conn, player_ids).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

/// Create a player. The registration projection always starts false.
pub async fn create_player(
    txn: &DatabaseTransaction,
    new_player: NewPlayer,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerCreate {
        club_id: new_player.club_id,
        team_id: new_player.team_id,
        first_name: new_player.first_name,
        last_name: new_player.last_name,
        jersey_number: new_player.jersey_number,
    };
    let player = players_adapter::create_player(txn, dto).await?;
    Ok(Player::from(player))
}

/// Persist the registration projection for a player.
pub async fn set_registration(
    txn: &DatabaseTransaction,
    player_id: i64,
    status: RegistrationStatus,
) -> Result<(), DomainError> {
    let dto = players_adapter::PlayerSetRegistration {
        player_id,
        registered: status.registered,
        verified_at: status.verified_at,
    };
    let rows = players_adapter::set_registration(txn, dto).await?;

    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {player_id} not found"),
        ));
    }
    Ok(())
}

pub async fn delete_player(txn: &DatabaseTransaction, player_id: i64) -> Result<(), DomainError> {
    let rows = players_adapter::delete_player(txn, player_id).await?;

    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {player_id} not found"),
        ));
    }
    Ok(())
}

impl From<crate::entities::players::Model> for Player {
    fn from(model: crate::entities::players::Model) -> Self {
        Self {
            id: model.id,
            club_id: model.club_id,
            team_id: model.team_id,
            first_name: model.first_name,
            last_name: model.last_name,
            jersey_number: model.jersey_number,
            registration: RegistrationStatus {
                registered: model.registered,
                verified_at: model.verified_at,
            },
            created_at: model.created_at,
        }
    }
}
