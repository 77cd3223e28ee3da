//! DTOs for registrations_sea adapter.

use crate::entities::registration_mappings::SyncStatus;

/// DTO for creating a registration mapping.
#[derive(Debug, Clone)]
pub struct MappingCreate {
    pub player_id: i64,
    pub twizzit_id: String,
    pub twizzit_name: String,
    pub sync_status: SyncStatus,
}
