//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games::GameStatus;
use crate::errors::domain::DomainError;

/// Game domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub home_club_id: i64,
    pub away_club_id: i64,
    pub competition_id: Option<i64>,
    pub status: GameStatus,
    pub scheduled_at: Option<OffsetDateTime>,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

impl From<crate::entities::games::Model> for Game {
    fn from(model: crate::entities::games::Model) -> Self {
        Self {
            id: model.id,
            home_club_id: model.home_club_id,
            away_club_id: model.away_club_id,
            competition_id: model.competition_id,
            status: model.status,
            scheduled_at: model.scheduled_at,
        }
    }
}
