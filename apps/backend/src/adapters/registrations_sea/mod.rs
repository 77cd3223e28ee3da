//! SeaORM adapter for registration mappings.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, Set,
};

use crate::entities::registration_mappings;

pub mod dto;

pub use dto::MappingCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    mapping_id: i64,
) -> Result<Option<registration_mappings::Model>, sea_orm::DbErr> {
    registration_mappings::Entity::find_by_id(mapping_id)
        .one(conn)
        .await
}

pub async fn find_all_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<registration_mappings::Model>, sea_orm::DbErr> {
    registration_mappings::Entity::find()
        .filter(registration_mappings::Column::PlayerId.eq(player_id))
        .all(conn)
        .await
}

pub async fn count_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    registration_mappings::Entity::find()
        .filter(registration_mappings::Column::PlayerId.eq(player_id))
        .count(conn)
        .await
}

pub async fn create_mapping(
    txn: &DatabaseTransaction,
    dto: MappingCreate,
) -> Result<registration_mappings::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mapping_active = registration_mappings::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        twizzit_id: Set(dto.twizzit_id),
        twizzit_name: Set(dto.twizzit_name),
        sync_status: Set(dto.sync_status),
        created_at: Set(now),
        updated_at: Set(now),
    };

    mapping_active.insert(txn).await
}

/// Delete a mapping row. Returns the number of rows removed.
pub async fn delete_mapping(
    txn: &DatabaseTransaction,
    mapping_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = registration_mappings::Entity::delete_by_id(mapping_id)
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}
