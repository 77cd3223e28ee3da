//! Competition repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::competitions_sea as competitions_adapter;
use crate::errors::domain::DomainError;

/// Competition domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub season: String,
    pub is_official: bool,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Option<Competition>, DomainError> {
    let competition = competitions_adapter::find_by_id(conn, competition_id).await?;
    Ok(competition.map(Competition::from))
}

impl From<crate::entities::competitions::Model> for Competition {
    fn from(model: crate::entities::competitions::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            season: model.season,
            is_official: model.is_official,
        }
    }
}
