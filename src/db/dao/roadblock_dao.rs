use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::info;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{Project, Roadblock};
use crate::db::entities::roadblock;

#[derive(Clone)]
pub struct RoadblockDao {
    db: DatabaseConnection,
}

impl DaoBase for RoadblockDao {
    type Entity = Roadblock;
    const ENTITY_NAME: &'static str = "roadblock";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RoadblockDao {
    pub async fn create_roadblock(
        &self,
        project_id: i32,
        description: &str,
    ) -> DaoResult<roadblock::Model> {
        if Project::find_by_id(project_id).one(&self.db).await?.is_none() {
            return Err(DaoLayerError::not_found("project", project_id));
        }

        let model = roadblock::ActiveModel {
            project_id: Set(project_id),
            description: Set(description.to_string()),
            username: Set(String::new()),
            ..Default::default()
        };
        let created = self.create(model).await?;
        info!(roadblock_id = created.id, project_id, "roadblock added");
        Ok(created)
    }

    pub async fn delete_roadblock(&self, id: i32) -> DaoResult<roadblock::Model> {
        let existing = self.find_by_id(id).await?;
        self.delete(id).await?;
        info!(roadblock_id = id, project_id = existing.project_id, "roadblock deleted");
        Ok(existing)
    }
}
