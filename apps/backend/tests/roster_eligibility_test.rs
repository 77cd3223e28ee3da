//! Service-level tests for the official-match roster eligibility gate.

mod support;

use std::collections::BTreeSet;

use backend::db::txn::with_txn;
use backend::errors::ErrorCode;
use backend::repos::registrations::TwizzitLink;
use backend::repos::rosters::NewRosterEntry;
use backend::services::registrations::RegistrationService;
use backend::services::rosters::RosterService;
use backend::AppError;
use backend_test_support::unique_helpers::unique_twizzit_id;
use sea_orm::DatabaseTransaction;

use crate::support::build_test_state;
use crate::support::factory::{
    create_test_club, create_test_competition, create_test_game, create_test_mapping,
    create_test_player,
};

fn entry(club_id: i64, player_id: i64) -> NewRosterEntry {
    NewRosterEntry {
        club_id,
        player_id,
        is_captain: false,
    }
}

async fn register_player(txn: &DatabaseTransaction, player_id: i64) -> Result<(), AppError> {
    RegistrationService::new()
        .link_player(
            txn,
            player_id,
            TwizzitLink {
                twizzit_id: unique_twizzit_id(),
                twizzit_name: "Twizzit Member".to_string(),
            },
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn official_game_rejects_mixed_batch_listing_only_unregistered() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let competition = create_test_competition(txn, true).await?;
            let game = create_test_game(txn, club, club, Some(competition)).await?;

            let registered = create_test_player(txn, club, "Anna").await?;
            let unregistered = create_test_player(txn, club, "Bram").await?;
            register_player(txn, registered).await?;

            let result = RosterService::new()
                .submit_roster(txn, game, vec![entry(club, registered), entry(club, unregistered)])
                .await;

            match result {
                Err(AppError::RosterIneligible { ineligible }) => {
                    assert_eq!(ineligible.len(), 1);
                    assert_eq!(ineligible[0].player_id, unregistered);
                    assert!(ineligible[0]
                        .reason
                        .to_lowercase()
                        .contains("not registered"));
                }
                other => panic!("Expected RosterIneligible, got: {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn friendly_game_allows_unregistered_players() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let game = create_test_game(txn, club, club, None).await?;

            let registered = create_test_player(txn, club, "Anna").await?;
            let unregistered = create_test_player(txn, club, "Bram").await?;
            register_player(txn, registered).await?;

            let stored = RosterService::new()
                .submit_roster(txn, game, vec![entry(club, registered), entry(club, unregistered)])
                .await?;

            assert_eq!(stored.len(), 2);
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn unofficial_competition_is_exempt() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let competition = create_test_competition(txn, false).await?;
            let game = create_test_game(txn, club, club, Some(competition)).await?;

            let unregistered = create_test_player(txn, club, "Bram").await?;

            let stored = RosterService::new()
                .submit_roster(txn, game, vec![entry(club, unregistered)])
                .await?;

            assert_eq!(stored.len(), 1);
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn official_game_reports_every_offender() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let competition = create_test_competition(txn, true).await?;
            let game = create_test_game(txn, club, club, Some(competition)).await?;

            let first = create_test_player(txn, club, "Cas").await?;
            let second = create_test_player(txn, club, "Daan").await?;

            let result = RosterService::new()
                .submit_roster(txn, game, vec![entry(club, first), entry(club, second)])
                .await;

            match result {
                Err(AppError::RosterIneligible { ineligible }) => {
                    let ids: BTreeSet<i64> = ineligible.iter().map(|p| p.player_id).collect();
                    assert_eq!(ids, BTreeSet::from([first, second]));
                }
                other => panic!("Expected RosterIneligible, got: {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn official_game_accepts_fully_registered_batch_and_replaces_roster(
) -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let competition = create_test_competition(txn, true).await?;
            let game = create_test_game(txn, club, club, Some(competition)).await?;

            let first = create_test_player(txn, club, "Anna").await?;
            let second = create_test_player(txn, club, "Bram").await?;
            register_player(txn, first).await?;
            register_player(txn, second).await?;

            let service = RosterService::new();
            let stored = service
                .submit_roster(txn, game, vec![entry(club, first), entry(club, second)])
                .await?;
            assert_eq!(stored.len(), 2);

            // Resubmission replaces the previous roster wholesale.
            let replaced = service
                .submit_roster(txn, game, vec![entry(club, first)])
                .await?;
            assert_eq!(replaced.len(), 1);
            assert_eq!(replaced[0].player_id, first);

            let current = service.game_roster(txn, game).await?;
            assert_eq!(current.len(), 1);
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn empty_submission_is_rejected_before_the_gate() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let game = create_test_game(txn, club, club, None).await?;

            let result = RosterService::new().submit_roster(txn, game, vec![]).await;

            match result {
                Err(AppError::Validation { code, .. }) => {
                    assert_eq!(code, ErrorCode::EmptyRoster);
                }
                other => panic!("Expected EmptyRoster validation error, got: {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn unknown_player_reference_is_not_conflated_with_ineligibility() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let competition = create_test_competition(txn, true).await?;
            let game = create_test_game(txn, club, club, Some(competition)).await?;

            let known = create_test_player(txn, club, "Anna").await?;
            register_player(txn, known).await?;

            let result = RosterService::new()
                .submit_roster(
                    txn,
                    game,
                    vec![entry(club, known), entry(club, 990_001), entry(club, 990_002)],
                )
                .await;

            match result {
                Err(AppError::Validation { code, detail, status }) => {
                    assert_eq!(code, ErrorCode::RosterPlayerUnknown);
                    assert_eq!(status.as_u16(), 422);
                    // Every unknown id is reported, not just the first.
                    assert!(detail.contains("990001"));
                    assert!(detail.contains("990002"));
                }
                other => panic!("Expected RosterPlayerUnknown, got: {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn unknown_game_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let player = create_test_player(txn, club, "Anna").await?;

            let result = RosterService::new()
                .submit_roster(txn, 424_242, vec![entry(club, player)])
                .await;

            match result {
                Err(AppError::NotFound { code, .. }) => {
                    assert_eq!(code, ErrorCode::GameNotFound);
                }
                other => panic!("Expected GameNotFound, got: {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn gate_trusts_the_projection_not_the_mapping_table() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let competition = create_test_competition(txn, true).await?;
            let game = create_test_game(txn, club, club, Some(competition)).await?;

            // A mapping row written behind the tracker's back leaves the
            // projection false; the gate evaluates the flag, nothing else.
            let player = create_test_player(txn, club, "Anna").await?;
            create_test_mapping(txn, player).await?;

            let result = RosterService::new()
                .submit_roster(txn, game, vec![entry(club, player)])
                .await;

            match result {
                Err(AppError::RosterIneligible { ineligible }) => {
                    assert_eq!(ineligible.len(), 1);
                    assert_eq!(ineligible[0].player_id, player);
                }
                other => panic!("Expected RosterIneligible, got: {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn duplicate_player_in_one_batch_hits_the_unique_constraint() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            let game = create_test_game(txn, club, club, None).await?;
            let player = create_test_player(txn, club, "Anna").await?;

            let result = RosterService::new()
                .submit_roster(txn, game, vec![entry(club, player), entry(club, player)])
                .await;

            match result {
                Err(AppError::Conflict { code, .. }) => {
                    assert_eq!(code, ErrorCode::DuplicateRosterEntry);
                }
                other => panic!("Expected DuplicateRosterEntry conflict, got: {other:?}"),
            }
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
