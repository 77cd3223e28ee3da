//! Roster entry repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::rosters_sea as rosters_adapter;
use crate::errors::domain::DomainError;

/// Stored roster entry domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRosterEntry {
    pub id: i64,
    pub game_id: i64,
    pub club_id: i64,
    pub player_id: i64,
    pub is_captain: bool,
}

/// New roster entry input (one line of a submission).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRosterEntry {
    pub club_id: i64,
    pub player_id: i64,
    pub is_captain: bool,
}

pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<StoredRosterEntry>, DomainError> {
    let entries = rosters_adapter::find_all_by_game(conn, game_id).await?;
    Ok(entries.into_iter().map(StoredRosterEntry::from).collect())
}

pub async fn count_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, DomainError> {
    let count = rosters_adapter::count_by_player(conn, player_id).await?;
    Ok(count)
}

pub async fn insert_entries(
    txn: &DatabaseTransaction,
    game_id: i64,
    entries: Vec<NewRosterEntry>,
) -> Result<Vec<StoredRosterEntry>, DomainError> {
    let dtos = entries
        .into_iter()
        .map(|e| rosters_adapter::RosterEntryCreate {
            game_id,
            club_id: e.club_id,
            player_id: e.player_id,
            is_captain: e.is_captain,
        })
        .collect();
    let stored = rosters_adapter::insert_entries(txn, dtos).await?;
    Ok(stored.into_iter().map(StoredRosterEntry::from).collect())
}

pub async fn delete_by_game(txn: &DatabaseTransaction, game_id: i64) -> Result<u64, DomainError> {
    let rows = rosters_adapter::delete_by_game(txn, game_id).await?;
    Ok(rows)
}

impl From<crate::entities::roster_entries::Model> for StoredRosterEntry {
    fn from(model: crate::entities::roster_entries::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            club_id: model.club_id,
            player_id: model.player_id,
            is_captain: model.is_captain,
        }
    }
}
