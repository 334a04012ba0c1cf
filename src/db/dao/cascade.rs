use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::db::entities::prelude::{Comment, Project, Roadblock, Supply};
use crate::db::entities::{comment, project, roadblock, supply};

/// Row counts removed by a cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub projects: u64,
    pub supplies: u64,
    pub roadblocks: u64,
    pub comments: u64,
}

/// Deletes the given projects together with everything they own.
///
/// Children go first so the statements are valid whether or not the backend
/// enforces the `ON DELETE CASCADE` foreign keys. Callers run this inside the
/// transaction that also removes the parent row.
pub(super) async fn delete_projects<C>(conn: &C, project_ids: &[i32]) -> Result<CascadeSummary, DbErr>
where
    C: ConnectionTrait,
{
    if project_ids.is_empty() {
        return Ok(CascadeSummary::default());
    }
    let ids = project_ids.iter().copied();

    let supplies = Supply::delete_many()
        .filter(supply::Column::ProjectId.is_in(ids.clone()))
        .exec(conn)
        .await?
        .rows_affected;
    let roadblocks = Roadblock::delete_many()
        .filter(roadblock::Column::ProjectId.is_in(ids.clone()))
        .exec(conn)
        .await?
        .rows_affected;
    let comments = Comment::delete_many()
        .filter(comment::Column::ProjectId.is_in(ids.clone()))
        .exec(conn)
        .await?
        .rows_affected;
    let projects = Project::delete_many()
        .filter(project::Column::Id.is_in(ids))
        .exec(conn)
        .await?
        .rows_affected;

    Ok(CascadeSummary {
        projects,
        supplies,
        roadblocks,
        comments,
    })
}
