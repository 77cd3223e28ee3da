//! SeaORM adapter for player repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::{PlayerCreate, PlayerSetRegistration};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Id.is_in(player_ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn create_player(
    txn: &DatabaseTransaction,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let player_active = players::ActiveModel {
        id: NotSet,
        club_id: Set(dto.club_id),
        team_id: Set(dto.team_id),
        first_name: Set(dto.first_name),
        last_name: Set(dto.last_name),
        jersey_number: Set(dto.jersey_number),
        registered: Set(false),
        verified_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    player_active.insert(txn).await
}

/// Persist the registration projection. Returns the number of rows touched
/// so callers can distinguish a missing player.
pub async fn set_registration(
    txn: &DatabaseTransaction,
    dto: PlayerSetRegistration,
) -> Result<u64, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let result = players::Entity::update_many()
        .col_expr(
            players::Column::Registered,
            sea_orm::sea_query::Expr::value(dto.registered),
        )
        .col_expr(
            players::Column::VerifiedAt,
            sea_orm::sea_query::Expr::value(dto.verified_at),
        )
        .col_expr(
            players::Column::UpdatedAt,
            sea_orm::sea_query::Expr::value(now),
        )
        .filter(players::Column::Id.eq(dto.player_id))
        .exec(txn)
        .await?;

    Ok(result.rows_affected)
}

/// Delete a player row. Returns the number of rows removed.
pub async fn delete_player(
    txn: &DatabaseTransaction,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_by_id(player_id).exec(txn).await?;
    Ok(result.rows_affected)
}
