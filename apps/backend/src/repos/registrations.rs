//! Registration mapping repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::registrations_sea as registrations_adapter;
use crate::entities::registration_mappings::SyncStatus;
use crate::errors::domain::DomainError;

/// Registration mapping domain model
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationMapping {
    pub id: i64,
    pub player_id: i64,
    pub twizzit_id: String,
    pub twizzit_name: String,
    pub sync_status: SyncStatus,
}

/// Input for linking a player to a Twizzit registration.
#[derive(Debug, Clone)]
pub struct TwizzitLink {
    pub twizzit_id: String,
    pub twizzit_name: String,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    mapping_id: i64,
) -> Result<Option<RegistrationMapping>, DomainError> {
    let mapping = registrations_adapter::find_by_id(conn, mapping_id).await?;
    Ok(mapping.map(RegistrationMapping::from))
}

pub async fn find_all_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Vec<RegistrationMapping>, DomainError> {
    let mappings = registrations_adapter::find_all_by_player(conn, player_id).await?;
    Ok(mappings.into_iter().map(RegistrationMapping::from).collect())
}

pub async fn count_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, DomainError> {
    let count = registrations_adapter::count_for_player(conn, player_id).await?;
    Ok(count)
}

pub async fn create_mapping(
    txn: &DatabaseTransaction,
    player_id: i64,
    link: TwizzitLink,
) -> Result<RegistrationMapping, DomainError> {
    let dto = registrations_adapter::MappingCreate {
        player_id,
        twizzit_id: link.twizzit_id,
        twizzit_name: link.twizzit_name,
        sync_status: SyncStatus::Success,
    };
    let mapping = registrations_adapter::create_mapping(txn, dto).await?;
    Ok(RegistrationMapping::from(mapping))
}

pub async fn delete_mapping(
    txn: &DatabaseTransaction,
    mapping_id: i64,
) -> Result<u64, DomainError> {
    let rows = registrations_adapter::delete_mapping(txn, mapping_id).await?;
    Ok(rows)
}

impl From<crate::entities::registration_mappings::Model> for RegistrationMapping {
    fn from(model: crate::entities::registration_mappings::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            twizzit_id: model.twizzit_id,
            twizzit_name: model.twizzit_name,
            sync_status: model.sync_status,
        }
    }
}
