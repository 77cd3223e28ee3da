use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "club_id")]
    pub club_id: i64,
    #[sea_orm(column_name = "team_id")]
    pub team_id: Option<i64>,
    #[sea_orm(column_name = "first_name")]
    pub first_name: String,
    #[sea_orm(column_name = "last_name")]
    pub last_name: String,
    #[sea_orm(column_name = "jersey_number")]
    pub jersey_number: Option<i16>,
    /// Derived projection: true iff at least one registration mapping exists.
    /// Mutated only by the registration tracker, never written directly.
    pub registered: bool,
    #[sea_orm(column_name = "verified_at")]
    pub verified_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clubs::Entity",
        from = "Column::ClubId",
        to = "super::clubs::Column::Id"
    )]
    Club,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id"
    )]
    Team,
    #[sea_orm(has_many = "super::registration_mappings::Entity")]
    RegistrationMappings,
    #[sea_orm(has_many = "super::roster_entries::Entity")]
    RosterEntries,
}

impl Related<super::clubs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::registration_mappings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegistrationMappings.def()
    }
}

impl Related<super::roster_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
