//! Player and registration-mapping HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::players::{NewPlayer, Player};
use crate::repos::registrations::{RegistrationMapping, TwizzitLink};
use crate::services::players::{PlayerService, REGISTRATION_ADVISORY};
use crate::services::registrations::RegistrationService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreatePlayerRequest {
    club_id: i64,
    #[serde(default)]
    team_id: Option<i64>,
    first_name: String,
    last_name: String,
    #[serde(default)]
    jersey_number: Option<i16>,
}

#[derive(Serialize)]
struct PlayerResponse {
    id: i64,
    club_id: i64,
    team_id: Option<i64>,
    first_name: String,
    last_name: String,
    jersey_number: Option<i16>,
    registered: bool,
    #[serde(rename = "verifiedAt")]
    verified_at: Option<OffsetDateTime>,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            club_id: player.club_id,
            team_id: player.team_id,
            first_name: player.first_name,
            last_name: player.last_name,
            jersey_number: player.jersey_number,
            registered: player.registration.registered,
            verified_at: player.registration.verified_at,
        }
    }
}

#[derive(Serialize)]
struct CreatePlayerResponse {
    player: PlayerResponse,
    /// Non-fatal reminder that the player still needs a Twizzit registration.
    advisory: &'static str,
}

#[derive(Debug, Deserialize)]
struct LinkRegistrationRequest {
    twizzit_id: String,
    twizzit_name: String,
}

#[derive(Serialize)]
struct MappingResponse {
    id: i64,
    player_id: i64,
    twizzit_id: String,
    twizzit_name: String,
    sync_status: crate::entities::registration_mappings::SyncStatus,
}

impl From<RegistrationMapping> for MappingResponse {
    fn from(mapping: RegistrationMapping) -> Self {
        Self {
            id: mapping.id,
            player_id: mapping.player_id,
            twizzit_id: mapping.twizzit_id,
            twizzit_name: mapping.twizzit_name,
            sync_status: mapping.sync_status,
        }
    }
}

/// POST /api/players
///
/// Creates a player. The registration projection always starts false; the
/// response carries an advisory reminding the caller to link a Twizzit
/// registration before official-match rosters.
async fn create_player(
    http_req: HttpRequest,
    body: ValidatedJson<CreatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = PlayerService::new();
            service
                .create_player(
                    txn,
                    NewPlayer {
                        club_id: req.club_id,
                        team_id: req.team_id,
                        first_name: req.first_name,
                        last_name: req.last_name,
                        jersey_number: req.jersey_number,
                    },
                )
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(CreatePlayerResponse {
        player: PlayerResponse::from(player),
        advisory: REGISTRATION_ADVISORY,
    }))
}

/// GET /api/players/{player_id}
async fn get_player(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<PlayerResponse>, AppError> {
    let player_id = path.into_inner();

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = PlayerService::new();
            service.find_player(txn, player_id).await
        })
    })
    .await?;

    Ok(web::Json(PlayerResponse::from(player)))
}

/// DELETE /api/players/{player_id}
///
/// Refused with 409 while roster entries still reference the player.
async fn delete_player(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = PlayerService::new();
            service.remove_player(txn, player_id).await
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/players/{player_id}/registrations
///
/// Links the player to a Twizzit registration; the registration tracker
/// raises the player's `registered` flag in the same transaction.
async fn link_registration(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: ValidatedJson<LinkRegistrationRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let req = body.into_inner();

    let mapping = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = RegistrationService::new();
            service
                .link_player(
                    txn,
                    player_id,
                    TwizzitLink {
                        twizzit_id: req.twizzit_id,
                        twizzit_name: req.twizzit_name,
                    },
                )
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(MappingResponse::from(mapping)))
}

/// GET /api/players/{player_id}/registrations
async fn list_registrations(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<MappingResponse>>, AppError> {
    let player_id = path.into_inner();

    let mappings = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = RegistrationService::new();
            service.player_mappings(txn, player_id).await
        })
    })
    .await?;

    Ok(web::Json(
        mappings.into_iter().map(MappingResponse::from).collect(),
    ))
}

/// DELETE /api/players/{player_id}/registrations/{mapping_id}
///
/// Removes the mapping; the tracker drops the `registered` flag when the
/// last mapping for the player is gone.
async fn unlink_registration(
    http_req: HttpRequest,
    path: web::Path<(i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (player_id, mapping_id) = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let service = RegistrationService::new();
            service.unlink_player(txn, player_id, mapping_id).await
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_player)));
    cfg.service(
        web::resource("/{player_id}")
            .route(web::get().to(get_player))
            .route(web::delete().to(delete_player)),
    );
    cfg.service(
        web::resource("/{player_id}/registrations")
            .route(web::post().to(link_registration))
            .route(web::get().to(list_registrations)),
    );
    cfg.service(
        web::resource("/{player_id}/registrations/{mapping_id}")
            .route(web::delete().to(unlink_registration)),
    );
}
