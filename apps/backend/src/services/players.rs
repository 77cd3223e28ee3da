//! Player domain service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::clubs as clubs_repo;
use crate::repos::players as players_repo;
use crate::repos::players::{NewPlayer, Player};
use crate::repos::rosters as rosters_repo;

/// Advisory returned alongside every created player: the registration
/// projection starts false and only the tracker can raise it.
pub const REGISTRATION_ADVISORY: &str = "Player is not registered with Twizzit yet. Link a \
    Twizzit registration before adding them to an official match roster.";

/// Player domain service.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Create a player under an existing club. Always starts unregistered.
    pub async fn create_player(
        &self,
        txn: &DatabaseTransaction,
        new_player: NewPlayer,
    ) -> Result<Player, AppError> {
        let club_id = new_player.club_id;
        if clubs_repo::find_by_id(txn, club_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Club,
                format!("Club {club_id} not found"),
            )
            .into());
        }

        let player = players_repo::create_player(txn, new_player).await?;
        Ok(player)
    }

    pub async fn find_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<Player, AppError> {
        players_repo::find_by_id(conn, player_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {player_id} not found"),
                )
                .into()
            })
    }

    /// Remove a player. Refused while any roster entry still references
    /// them; deregister and clear rosters first.
    pub async fn remove_player(
        &self,
        txn: &DatabaseTransaction,
        player_id: i64,
    ) -> Result<(), AppError> {
        if players_repo::find_by_id(txn, player_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            )
            .into());
        }

        let roster_refs = rosters_repo::count_by_player(txn, player_id).await?;
        if roster_refs > 0 {
            return Err(DomainError::conflict(
                ConflictKind::PlayerRostered,
                format!("Player {player_id} is referenced by {roster_refs} roster entries"),
            )
            .into());
        }

        players_repo::delete_player(txn, player_id).await?;
        Ok(())
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
