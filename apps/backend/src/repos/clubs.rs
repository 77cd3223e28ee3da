//! Club repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::clubs_sea as clubs_adapter;
use crate::errors::domain::DomainError;

/// Club domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: i64,
    pub name: String,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    club_id: i64,
) -> Result<Option<Club>, DomainError> {
    let club = clubs_adapter::find_by_id(conn, club_id).await?;
    Ok(club.map(Club::from))
}

impl From<crate::entities::clubs::Model> for Club {
    fn from(model: crate::entities::clubs::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
