//! Registration tracker service.
//!
//! Applies the registration-status transitions in the same transaction as
//! the mapping write, regardless of which caller performs the write (HTTP
//! route, import job, test). Both-or-neither: a failure rolls back the
//! mapping change together with the flag change.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::players as players_repo;
use crate::repos::registrations as registrations_repo;
use crate::repos::registrations::{RegistrationMapping, TwizzitLink};

/// Registration tracker service.
pub struct RegistrationService;

impl RegistrationService {
    pub fn new() -> Self {
        Self
    }

    /// Link a player to a Twizzit registration.
    ///
    /// Inserts the mapping row and advances the player's registration
    /// projection. Creating a second mapping for an already-registered
    /// player leaves the projection untouched (no `verified_at` refresh).
    pub async fn link_player(
        &self,
        txn: &DatabaseTransaction,
        player_id: i64,
        link: TwizzitLink,
    ) -> Result<RegistrationMapping, AppError> {
        let player = players_repo::find_by_id(txn, player_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {player_id} not found"),
                )
            })?;

        let mapping = registrations_repo::create_mapping(txn, player_id, link).await?;

        let status = player
            .registration
            .on_mapping_created(OffsetDateTime::now_utc());
        if status != player.registration {
            players_repo::set_registration(txn, player_id, status).await?;
            info!(player_id, mapping_id = mapping.id, "player registered");
        }

        Ok(mapping)
    }

    /// Remove a player's mapping.
    ///
    /// Deletes the row, re-counts the remaining mappings, and drops the
    /// registration projection only when none remain.
    pub async fn unlink_player(
        &self,
        txn: &DatabaseTransaction,
        player_id: i64,
        mapping_id: i64,
    ) -> Result<(), AppError> {
        let player = players_repo::find_by_id(txn, player_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {player_id} not found"),
                )
            })?;

        let mapping = registrations_repo::find_by_id(txn, mapping_id)
            .await?
            .filter(|m| m.player_id == player_id)
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Mapping,
                    format!("Registration mapping {mapping_id} not found for player {player_id}"),
                )
            })?;

        registrations_repo::delete_mapping(txn, mapping.id).await?;

        let remaining = registrations_repo::count_for_player(txn, player_id).await?;
        let status = player.registration.on_mapping_removed(remaining);
        if status != player.registration {
            players_repo::set_registration(txn, player_id, status).await?;
            info!(player_id, mapping_id, "player deregistered");
        }

        Ok(())
    }

    /// All mappings currently linked to a player.
    pub async fn player_mappings(
        &self,
        txn: &DatabaseTransaction,
        player_id: i64,
    ) -> Result<Vec<RegistrationMapping>, AppError> {
        if players_repo::find_by_id(txn, player_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not found"),
            )
            .into());
        }
        Ok(registrations_repo::find_all_by_player(txn, player_id).await?)
    }
}

impl Default for RegistrationService {
    fn default() -> Self {
        Self::new()
    }
}
