use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// Lookup list offered when tagging a project. Projects keep their tag as
/// free text, so nothing references this table.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "types")]
pub struct Model {
    #[sea_orm(unique)]
    pub name: String,
}

impl ActiveModelBehavior for ActiveModel {}
