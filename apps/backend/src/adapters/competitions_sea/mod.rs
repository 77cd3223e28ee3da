//! SeaORM adapter for competition lookups.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::competitions;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Option<competitions::Model>, sea_orm::DbErr> {
    competitions::Entity::find_by_id(competition_id).one(conn).await
}
