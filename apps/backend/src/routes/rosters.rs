//! Game roster HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::rosters::{NewRosterEntry, StoredRosterEntry};
use crate::services::rosters::RosterService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct RosterSubmission {
    players: Vec<RosterEntryPayload>,
}

#[derive(Debug, Deserialize)]
struct RosterEntryPayload {
    club_id: i64,
    player_id: i64,
    #[serde(default)]
    is_captain: bool,
}

#[derive(Serialize)]
struct RosterEntryResponse {
    id: i64,
    club_id: i64,
    player_id: i64,
    is_captain: bool,
}

#[derive(Serialize)]
struct RosterResponse {
    game_id: i64,
    players: Vec<RosterEntryResponse>,
}

impl RosterResponse {
    fn new(game_id: i64, entries: Vec<StoredRosterEntry>) -> Self {
        Self {
            game_id,
            players: entries
                .into_iter()
                .map(|e| RosterEntryResponse {
                    id: e.id,
                    club_id: e.club_id,
                    player_id: e.player_id,
                    is_captain: e.is_captain,
                })
                .collect(),
        }
    }
}

/// POST /api/games/{game_id}/roster
///
/// Submits a roster for the game. For official matches every player must be
/// registered with Twizzit; otherwise the whole batch is refused with 403
/// and the complete list of ineligible players.
async fn submit_roster(
    http_req: HttpRequest,
    game_id: GameId,
    body: ValidatedJson<RosterSubmission>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    let entries: Vec<NewRosterEntry> = body
        .into_inner()
        .players
        .into_iter()
        .map(|p| NewRosterEntry {
            club_id: p.club_id,
            player_id: p.player_id,
            is_captain: p.is_captain,
        })
        .collect();

    let stored = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = RosterService::new();
            service.submit_roster(txn, id, entries).await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(RosterResponse::new(id, stored)))
}

/// GET /api/games/{game_id}/roster
async fn get_roster(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RosterResponse>, AppError> {
    let id = game_id.0;

    let entries = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = RosterService::new();
            service.game_roster(txn, id).await
        })
    })
    .await?;

    Ok(web::Json(RosterResponse::new(id, entries)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{game_id}/roster")
            .route(web::post().to(submit_roster))
            .route(web::get().to(get_roster)),
    );
}
