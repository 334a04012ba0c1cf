use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::info;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{Project, Supply};
use crate::db::entities::supply;

#[derive(Clone)]
pub struct SupplyDao {
    db: DatabaseConnection,
}

impl DaoBase for SupplyDao {
    type Entity = Supply;
    const ENTITY_NAME: &'static str = "supply";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl SupplyDao {
    pub async fn create_supply(&self, project_id: i32, item: &str) -> DaoResult<supply::Model> {
        if Project::find_by_id(project_id).one(&self.db).await?.is_none() {
            return Err(DaoLayerError::not_found("project", project_id));
        }

        let model = supply::ActiveModel {
            project_id: Set(project_id),
            item: Set(item.to_string()),
            checked: Set(false),
            ..Default::default()
        };
        let created = self.create(model).await?;
        info!(supply_id = created.id, project_id, "supply added");
        Ok(created)
    }

    pub async fn find_supply(&self, id: i32) -> DaoResult<supply::Model> {
        self.find_by_id(id).await
    }

    /// Flips `checked` and returns the stored row.
    pub async fn toggle_supply(&self, id: i32) -> DaoResult<supply::Model> {
        let current = self.find_by_id(id).await?;
        let checked = !current.checked;
        self.update(id, move |active| {
            active.checked = Set(checked);
        })
        .await
    }

    /// Deletes the supply and hands back the removed row so callers still know
    /// which project it belonged to.
    pub async fn delete_supply(&self, id: i32) -> DaoResult<supply::Model> {
        let existing = self.find_by_id(id).await?;
        self.delete(id).await?;
        info!(supply_id = id, project_id = existing.project_id, "supply deleted");
        Ok(existing)
    }
}
