//! SeaORM adapter for game lookups.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::games;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}
