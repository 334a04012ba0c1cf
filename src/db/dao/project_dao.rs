use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait,
};
use tracing::info;

use super::cascade::{self, CascadeSummary};
use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{Category, Project};
use crate::db::entities::{comment, project, supply};

/// Every writable project column. Updates replace all of them at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub name: String,
    pub category_id: i32,
    pub tag: String,
    pub implement: String,
    pub information: String,
}

/// A project plus the rows created alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub fields: ProjectFields,
    pub supplies: Vec<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
impl NewProject {
    pub fn simple(name: &str, category_id: i32, tag: &str) -> Self {
        Self {
            fields: ProjectFields {
                name: name.to_string(),
                category_id,
                tag: tag.to_string(),
                implement: String::new(),
                information: String::new(),
            },
            supplies: Vec::new(),
            comment: None,
        }
    }
}

#[derive(Clone)]
pub struct ProjectDao {
    db: DatabaseConnection,
}

impl DaoBase for ProjectDao {
    type Entity = Project;
    const ENTITY_NAME: &'static str = "project";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ProjectDao {
    /// Writes the project, its supplies (in the given order) and the optional
    /// first comment in one transaction.
    pub async fn create_project(&self, new: NewProject) -> DaoResult<project::Model> {
        let NewProject {
            fields,
            supplies,
            comment,
        } = new;
        let txn = self.db.begin().await?;
        ensure_category(&txn, fields.category_id).await?;

        let now = Utc::now().fixed_offset();
        let created = project::ActiveModel {
            name: Set(fields.name),
            category_id: Set(fields.category_id),
            tag: Set(fields.tag),
            implement: Set(fields.implement),
            information: Set(fields.information),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|err| DaoLayerError::from_db(Self::ENTITY_NAME, err))?;

        let supply_count = supplies.len();
        for item in supplies {
            supply::ActiveModel {
                project_id: Set(created.id),
                item: Set(item),
                checked: Set(false),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|err| DaoLayerError::from_db("supply", err))?;
        }

        let has_comment = comment.is_some();
        if let Some(text) = comment {
            comment::ActiveModel {
                project_id: Set(created.id),
                text: Set(text),
                username: Set(String::new()),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|err| DaoLayerError::from_db("comment", err))?;
        }

        txn.commit().await?;
        info!(
            project_id = created.id,
            category_id = created.category_id,
            supplies = supply_count,
            with_comment = has_comment,
            "project created"
        );
        Ok(created)
    }

    pub async fn find_project(&self, id: i32) -> DaoResult<project::Model> {
        self.find_by_id(id).await
    }

    pub async fn update_project(&self, id: i32, fields: ProjectFields) -> DaoResult<project::Model> {
        let txn = self.db.begin().await?;

        let existing = Project::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DaoLayerError::not_found(Self::ENTITY_NAME, id))?;
        ensure_category(&txn, fields.category_id).await?;

        let mut active: project::ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.category_id = Set(fields.category_id);
        active.tag = Set(fields.tag);
        active.implement = Set(fields.implement);
        active.information = Set(fields.information);
        let updated = active
            .update(&txn)
            .await
            .map_err(|err| DaoLayerError::from_db(Self::ENTITY_NAME, err))?;

        txn.commit().await?;
        info!(project_id = id, "project updated");
        Ok(updated)
    }

    pub async fn delete_project(&self, id: i32) -> DaoResult<CascadeSummary> {
        let txn = self.db.begin().await?;

        if Project::find_by_id(id).one(&txn).await?.is_none() {
            return Err(DaoLayerError::not_found(Self::ENTITY_NAME, id));
        }
        let summary = cascade::delete_projects(&txn, &[id]).await?;
        txn.commit().await?;

        info!(
            project_id = id,
            supplies = summary.supplies,
            roadblocks = summary.roadblocks,
            comments = summary.comments,
            "project deleted"
        );
        Ok(summary)
    }
}

async fn ensure_category<C: ConnectionTrait>(conn: &C, category_id: i32) -> DaoResult<()> {
    if Category::find_by_id(category_id).one(conn).await?.is_none() {
        return Err(DaoLayerError::conflict(
            ProjectDao::ENTITY_NAME,
            format!("category {category_id} does not exist"),
        ));
    }
    Ok(())
}
