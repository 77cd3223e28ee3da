//! Route-level tests for player creation and registration endpoints.

mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::db::txn::with_txn;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::AppError;
use serde_json::{json, Value};

use crate::support::build_test_state;
use crate::support::factory::{
    create_test_club, create_test_game, create_test_player, create_test_team,
};

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(web::Data::new($state.clone()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn create_player_starts_unregistered_with_advisory() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let (club, team) = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let team = create_test_team(txn, club).await?;
            Ok::<_, AppError>((club, team))
        })
    })
    .await?;

    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "club_id": club,
            "team_id": team,
            "first_name": "Anna",
            "last_name": "Peeters",
            "jersey_number": 7
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["player"]["registered"], false);
    assert!(body["player"]["verifiedAt"].is_null());
    assert_eq!(body["player"]["first_name"], "Anna");
    assert_eq!(body["player"]["team_id"].as_i64().unwrap(), team);
    assert!(body["advisory"].as_str().unwrap().contains("Twizzit"));

    Ok(())
}

#[actix_web::test]
async fn create_player_under_unknown_club_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "club_id": 424242,
            "first_name": "Anna",
            "last_name": "Peeters"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "CLUB_NOT_FOUND");

    Ok(())
}

#[actix_web::test]
async fn registration_link_and_unlink_round_trip_over_http() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let player = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            create_test_player(txn, club, "Anna").await
        })
    })
    .await?;

    let app = test_app!(state);

    // Link a Twizzit registration
    let req = test::TestRequest::post()
        .uri(&format!("/api/players/{player}/registrations"))
        .set_json(json!({
            "twizzit_id": "TWZ-000123",
            "twizzit_name": "Anna Peeters"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let mapping: Value = test::read_body_json(resp).await;
    let mapping_id = mapping["id"].as_i64().unwrap();
    assert_eq!(mapping["player_id"].as_i64().unwrap(), player);

    // The flag is now visible through the player resource
    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{player}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["registered"], true);
    assert!(!body["verifiedAt"].is_null());

    // Unlink drops the flag again
    let req = test::TestRequest::delete()
        .uri(&format!("/api/players/{player}/registrations/{mapping_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{player}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["registered"], false);
    assert!(body["verifiedAt"].is_null());

    Ok(())
}

#[actix_web::test]
async fn rostered_player_cannot_be_deleted() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let (player, free_player) = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let game = create_test_game(txn, club, club, None).await?;
            let rostered = create_test_player(txn, club, "Anna").await?;
            let free = create_test_player(txn, club, "Bram").await?;

            let service = backend::services::rosters::RosterService::new();
            service
                .submit_roster(
                    txn,
                    game,
                    vec![backend::repos::rosters::NewRosterEntry {
                        club_id: club,
                        player_id: rostered,
                        is_captain: true,
                    }],
                )
                .await?;
            Ok::<_, AppError>((rostered, free))
        })
    })
    .await?;

    let app = test_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/players/{player}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PLAYER_ROSTERED");

    // A player without roster references deletes fine
    let req = test::TestRequest::delete()
        .uri(&format!("/api/players/{free_player}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[actix_web::test]
async fn unknown_player_resource_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/players/424242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PLAYER_NOT_FOUND");

    Ok(())
}
