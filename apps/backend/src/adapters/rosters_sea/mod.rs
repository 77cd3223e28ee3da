//! SeaORM adapter for roster entries.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::roster_entries;

pub mod dto;

pub use dto::RosterEntryCreate;

pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<roster_entries::Model>, sea_orm::DbErr> {
    roster_entries::Entity::find()
        .filter(roster_entries::Column::GameId.eq(game_id))
        .order_by_asc(roster_entries::Column::Id)
        .all(conn)
        .await
}

pub async fn count_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    roster_entries::Entity::find()
        .filter(roster_entries::Column::PlayerId.eq(player_id))
        .count(conn)
        .await
}

/// Insert a batch of entries, returning the stored rows in input order.
/// Inserted one by one so the unique (game_id, player_id) index rejects
/// duplicates within the batch as well.
pub async fn insert_entries(
    txn: &DatabaseTransaction,
    dtos: Vec<RosterEntryCreate>,
) -> Result<Vec<roster_entries::Model>, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut stored = Vec::with_capacity(dtos.len());

    for dto in dtos {
        let entry_active = roster_entries::ActiveModel {
            id: NotSet,
            game_id: Set(dto.game_id),
            club_id: Set(dto.club_id),
            player_id: Set(dto.player_id),
            is_captain: Set(dto.is_captain),
            created_at: Set(now),
        };
        stored.push(entry_active.insert(txn).await?);
    }

    Ok(stored)
}

/// Remove a game's whole roster. Returns the number of rows removed.
pub async fn delete_by_game(
    txn: &DatabaseTransaction,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = roster_entries::Entity::delete_many()
        .filter(roster_entries::Column::GameId.eq(game_id))
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}
