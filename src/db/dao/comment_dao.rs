use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::info;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::comment;
use crate::db::entities::prelude::{Comment, Project};

#[derive(Clone)]
pub struct CommentDao {
    db: DatabaseConnection,
}

impl DaoBase for CommentDao {
    type Entity = Comment;
    const ENTITY_NAME: &'static str = "comment";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl CommentDao {
    pub async fn create_comment(&self, project_id: i32, text: &str) -> DaoResult<comment::Model> {
        if Project::find_by_id(project_id).one(&self.db).await?.is_none() {
            return Err(DaoLayerError::not_found("project", project_id));
        }

        let model = comment::ActiveModel {
            project_id: Set(project_id),
            text: Set(text.to_string()),
            username: Set(String::new()),
            ..Default::default()
        };
        let created = self.create(model).await?;
        info!(comment_id = created.id, project_id, "comment added");
        Ok(created)
    }

    pub async fn delete_comment(&self, id: i32) -> DaoResult<comment::Model> {
        let existing = self.find_by_id(id).await?;
        self.delete(id).await?;
        info!(comment_id = id, project_id = existing.project_id, "comment deleted");
        Ok(existing)
    }
}
