use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    pub name: String,
    #[sea_orm(indexed)]
    pub category_id: i32,
    pub tag: String,
    pub implement: String,
    #[sea_orm(column_type = "Text")]
    pub information: String,
    #[sea_orm(belongs_to, from = "category_id", to = "id", on_delete = "Cascade")]
    pub category: HasOne<super::category::Entity>,
    #[sea_orm(has_many)]
    pub supplies: HasMany<super::supply::Entity>,
    #[sea_orm(has_many)]
    pub roadblocks: HasMany<super::roadblock::Entity>,
    #[sea_orm(has_many)]
    pub comments: HasMany<super::comment::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
