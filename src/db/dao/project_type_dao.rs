use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};
use tracing::info;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::ProjectType;
use crate::db::entities::project_type;

/// Types inserted into an empty table on first startup.
pub const DEFAULT_TYPES: [&str; 4] = ["maintenance", "new", "repair", "upgrade"];

#[derive(Clone)]
pub struct ProjectTypeDao {
    db: DatabaseConnection,
}

impl DaoBase for ProjectTypeDao {
    type Entity = ProjectType;
    const ENTITY_NAME: &'static str = "type";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ProjectTypeDao {
    pub async fn create_type(&self, name: &str) -> DaoResult<project_type::Model> {
        let existing = ProjectType::find()
            .filter(project_type::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(DaoLayerError::conflict(
                Self::ENTITY_NAME,
                format!("a type named '{name}' already exists"),
            ));
        }

        let model = project_type::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        let created = self.create(model).await?;
        info!(type_id = created.id, name = %created.name, "type created");
        Ok(created)
    }

    pub async fn delete_type(&self, id: i32) -> DaoResult<i32> {
        let deleted = self.delete(id).await?;
        info!(type_id = id, "type deleted");
        Ok(deleted)
    }

    /// Inserts [`DEFAULT_TYPES`] when the table is empty. Returns the number
    /// of rows written, which is zero on every run after the first.
    pub async fn seed_defaults(&self) -> DaoResult<usize> {
        let txn = self.db.begin().await?;

        if ProjectType::find().count(&txn).await? > 0 {
            return Ok(0);
        }

        let now = Utc::now().fixed_offset();
        for name in DEFAULT_TYPES {
            project_type::ActiveModel {
                name: Set(name.to_string()),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|err| DaoLayerError::from_db(Self::ENTITY_NAME, err))?;
        }
        txn.commit().await?;

        info!(count = DEFAULT_TYPES.len(), "seeded default types");
        Ok(DEFAULT_TYPES.len())
    }
}
