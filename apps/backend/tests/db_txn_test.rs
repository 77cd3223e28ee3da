//! Transaction helper tests: both-or-neither semantics and SharedTxn injection.

mod support;

use std::sync::Arc;

use backend::db::txn::{with_txn, SharedTxn};
use backend::repos::registrations::TwizzitLink;
use backend::services::players::PlayerService;
use backend::services::registrations::RegistrationService;
use backend::AppError;
use backend_test_support::unique_helpers::unique_twizzit_id;

use crate::support::build_test_state;
use crate::support::factory::{create_test_club, create_test_player};

/// A failure after the tracker ran must roll back both the mapping row and
/// the flag write; a player can never end up registered-but-unmapped or
/// mapped-but-unregistered.
#[tokio::test]
async fn error_rolls_back_mapping_and_flag_together() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let player_id = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            create_test_player(txn, club, "Anna").await
        })
    })
    .await?;

    let result: Result<(), AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            RegistrationService::new()
                .link_player(
                    txn,
                    player_id,
                    TwizzitLink {
                        twizzit_id: unique_twizzit_id(),
                        twizzit_name: "Anna Peeters".to_string(),
                    },
                )
                .await?;
            // Something later in the same unit of work fails
            Err(AppError::internal("downstream failure".to_string()))
        })
    })
    .await;
    assert!(result.is_err());

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let player = PlayerService::new().find_player(txn, player_id).await?;
            assert!(!player.registration.registered);
            assert!(player.registration.verified_at.is_none());

            let registrations = RegistrationService::new();
            let mappings = registrations.player_mappings(txn, player_id).await?;
            assert!(mappings.is_empty());
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

/// A SharedTxn in request extensions is used as-is: with_txn neither
/// commits nor rolls it back, so rolling the shared transaction back
/// afterwards undoes the work.
#[tokio::test]
async fn shared_txn_is_borrowed_not_owned() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let db = state.db().expect("test state has a database");
    let shared = SharedTxn::open(db).await?;

    let mut req = actix_web::test::TestRequest::default().to_http_request();
    shared.inject(&mut req);

    let player_id = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move {
            let club = create_test_club(txn).await?;
            create_test_player(txn, club, "Anna").await
        })
    })
    .await?;

    // with_txn did not commit; roll the shared transaction back ourselves
    drop(req);
    let txn = Arc::try_unwrap(shared.0).expect("request no longer holds the transaction");
    txn.rollback().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let result = PlayerService::new().find_player(txn, player_id).await;
            assert!(matches!(result, Err(AppError::NotFound { .. })));
            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
