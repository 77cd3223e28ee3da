//! SeaORM adapter for club lookups.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::clubs;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: i64,
) -> Result<Option<clubs::Model>, sea_orm::DbErr> {
    clubs::Entity::find_by_id(club_id).one(conn).await
}
