use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "roadblocks")]
pub struct Model {
    #[sea_orm(indexed)]
    pub project_id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    // Always written as an empty string; there is no login to fill it from.
    pub username: String,
    #[sea_orm(belongs_to, from = "project_id", to = "id", on_delete = "Cascade")]
    pub project: HasOne<super::project::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
