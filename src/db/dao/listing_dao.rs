use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::{DaoLayerError, DaoResult};
use crate::db::entities::prelude::{Category, Comment, Project, ProjectType, Roadblock, Supply};
use crate::db::entities::{category, comment, project, project_type, roadblock, supply};

/// A roadblock paired with the project it blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadblockListing {
    pub roadblock: roadblock::Model,
    pub project: project::Model,
}

/// A supply paired with the project that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyListing {
    pub supply: supply::Model,
    pub project: project::Model,
}

/// Everything the project page shows, loaded up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub project: project::Model,
    pub category: category::Model,
    pub supplies: Vec<supply::Model>,
    pub roadblocks: Vec<roadblock::Model>,
    pub comments: Vec<comment::Model>,
}

/// Read-only queries that order or join across entities. Every method
/// returns fully loaded rows.
#[derive(Clone)]
pub struct ListingDao {
    db: DatabaseConnection,
}

impl ListingDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn categories(&self) -> DaoResult<Vec<category::Model>> {
        Ok(Category::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn types(&self) -> DaoResult<Vec<project_type::Model>> {
        Ok(ProjectType::find()
            .order_by_asc(project_type::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Newest first. The id breaks ties between rows stamped in the same
    /// instant.
    pub async fn projects_by_category(&self, category_id: i32) -> DaoResult<Vec<project::Model>> {
        Ok(Project::find()
            .filter(project::Column::CategoryId.eq(category_id))
            .order_by_desc(project::Column::CreatedAt)
            .order_by_desc(project::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Ordered by project name, then newest roadblock first. Projects that
    /// share a name interleave by roadblock time.
    pub async fn roadblocks_across_projects(&self) -> DaoResult<Vec<RoadblockListing>> {
        let rows = Roadblock::find()
            .find_also_related(Project)
            .order_by_asc(project::Column::Name)
            .order_by_desc(roadblock::Column::CreatedAt)
            .order_by_desc(roadblock::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(roadblock, project)| {
                project.map(|project| RoadblockListing { roadblock, project })
            })
            .collect())
    }

    /// Ordered by project name, then newest supply first. Projects that
    /// share a name interleave by supply time.
    pub async fn supplies_across_projects(&self) -> DaoResult<Vec<SupplyListing>> {
        let rows = Supply::find()
            .find_also_related(Project)
            .order_by_asc(project::Column::Name)
            .order_by_desc(supply::Column::CreatedAt)
            .order_by_desc(supply::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(supply, project)| project.map(|project| SupplyListing { supply, project }))
            .collect())
    }

    pub async fn supplies_for_project(&self, project_id: i32) -> DaoResult<Vec<supply::Model>> {
        Ok(Supply::find()
            .filter(supply::Column::ProjectId.eq(project_id))
            .order_by_asc(supply::Column::CreatedAt)
            .order_by_asc(supply::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn roadblocks_for_project(&self, project_id: i32) -> DaoResult<Vec<roadblock::Model>> {
        Ok(Roadblock::find()
            .filter(roadblock::Column::ProjectId.eq(project_id))
            .order_by_asc(roadblock::Column::CreatedAt)
            .order_by_asc(roadblock::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn comments_for_project(&self, project_id: i32) -> DaoResult<Vec<comment::Model>> {
        Ok(Comment::find()
            .filter(comment::Column::ProjectId.eq(project_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn project_detail(&self, project_id: i32) -> DaoResult<ProjectDetail> {
        let (project, category) = Project::find_by_id(project_id)
            .find_also_related(Category)
            .one(&self.db)
            .await?
            .ok_or(DaoLayerError::not_found("project", project_id))?;
        let category =
            category.ok_or(DaoLayerError::not_found("category", project.category_id))?;

        Ok(ProjectDetail {
            supplies: self.supplies_for_project(project.id).await?,
            roadblocks: self.roadblocks_for_project(project.id).await?,
            comments: self.comments_for_project(project.id).await?,
            project,
            category,
        })
    }
}
