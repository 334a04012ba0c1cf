use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::cascade::{self, CascadeSummary};
use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::category;
use crate::db::entities::prelude::{Category, Project};
use crate::db::entities::project;

#[derive(Clone)]
pub struct CategoryDao {
    db: DatabaseConnection,
}

impl DaoBase for CategoryDao {
    type Entity = Category;
    const ENTITY_NAME: &'static str = "category";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl CategoryDao {
    pub async fn create_category(&self, name: &str) -> DaoResult<category::Model> {
        if self.find_by_name(name).await?.is_some() {
            return Err(DaoLayerError::conflict(
                Self::ENTITY_NAME,
                format!("a category named '{name}' already exists"),
            ));
        }

        let model = category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        let created = self.create(model).await?;
        info!(category_id = created.id, name = %created.name, "category created");
        Ok(created)
    }

    pub async fn find_category(&self, id: i32) -> DaoResult<category::Model> {
        self.find_by_id(id).await
    }

    pub async fn find_by_name(&self, name: &str) -> DaoResult<Option<category::Model>> {
        Ok(Category::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }

    /// Removes the category, its projects and everything those projects own
    /// in one transaction.
    pub async fn delete_category(&self, id: i32) -> DaoResult<CascadeSummary> {
        let txn = self.db.begin().await?;

        if Category::find_by_id(id).one(&txn).await?.is_none() {
            return Err(DaoLayerError::not_found(Self::ENTITY_NAME, id));
        }

        let project_ids: Vec<i32> = Project::find()
            .select_only()
            .column(project::Column::Id)
            .filter(project::Column::CategoryId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        let summary = cascade::delete_projects(&txn, &project_ids).await?;
        Category::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(
            category_id = id,
            projects = summary.projects,
            supplies = summary.supplies,
            roadblocks = summary.roadblocks,
            comments = summary.comments,
            "category deleted"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, MockDatabase};

    use super::CategoryDao;
    use crate::db::dao::{DaoBase, DaoContext, DaoLayerError, NewProject};
    use crate::test_helpers::memory_db;

    #[tokio::test]
    async fn duplicate_names_are_rejected_without_adding_rows() {
        let db = memory_db().await;
        let dao = CategoryDao::new(&db);

        dao.create_category("Garden")
            .await
            .expect("first category should be created");
        let err = dao
            .create_category("Garden")
            .await
            .expect_err("duplicate category should be rejected");

        assert!(matches!(err, DaoLayerError::Conflict { .. }));
        let count = dao.count_where(|query| query).await.expect("count");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn delete_category_cascades_to_projects_and_children() {
        let db = memory_db().await;
        let daos = DaoContext::new(&db);
        let garden = daos
            .category()
            .create_category("Garden")
            .await
            .expect("category");
        let kitchen = daos
            .category()
            .create_category("Kitchen")
            .await
            .expect("category");

        let fence = daos
            .project()
            .create_project(NewProject::simple("Build Fence", garden.id, "new"))
            .await
            .expect("project");
        daos.supply()
            .create_supply(fence.id, "nails")
            .await
            .expect("supply");
        daos.roadblock()
            .create_roadblock(fence.id, "need a post hole digger")
            .await
            .expect("roadblock");
        daos.comment()
            .create_comment(fence.id, "started on the north side")
            .await
            .expect("comment");
        let sink = daos
            .project()
            .create_project(NewProject::simple("Fix Sink", kitchen.id, "repair"))
            .await
            .expect("project");
        daos.supply()
            .create_supply(sink.id, "washer")
            .await
            .expect("supply");

        let summary = daos
            .category()
            .delete_category(garden.id)
            .await
            .expect("delete should succeed");

        assert_eq!(summary.projects, 1);
        assert_eq!(summary.supplies, 1);
        assert_eq!(summary.roadblocks, 1);
        assert_eq!(summary.comments, 1);
        assert!(matches!(
            daos.project().find_project(fence.id).await,
            Err(DaoLayerError::NotFound { .. })
        ));
        assert_eq!(
            daos.supply().count_where(|query| query).await.expect("count"),
            1
        );
        assert_eq!(
            daos.roadblock().count_where(|query| query).await.expect("count"),
            0
        );
        assert_eq!(
            daos.comment().count_where(|query| query).await.expect("count"),
            0
        );
        daos.project()
            .find_project(sink.id)
            .await
            .expect("other category's project should survive");
    }

    #[tokio::test]
    async fn failed_cascade_leaves_the_category_intact() {
        let db = memory_db().await;
        let daos = DaoContext::new(&db);
        let garden = daos.category().create_category("Garden").await.expect("category");
        let mut new = NewProject::simple("Fence", garden.id, "new");
        new.supplies = vec!["posts".to_string(), "wire".to_string()];
        new.comment = Some("go".to_string());
        let project = daos.project().create_project(new).await.expect("project");
        daos.roadblock()
            .create_roadblock(project.id, "rain")
            .await
            .expect("roadblock");
        db.execute_unprepared(
            "CREATE TRIGGER keep_projects BEFORE DELETE ON projects \
             BEGIN SELECT RAISE(ABORT, 'projects are locked'); END",
        )
        .await
        .expect("trigger");

        daos.category()
            .delete_category(garden.id)
            .await
            .expect_err("cascade should fail");

        daos.category()
            .find_category(garden.id)
            .await
            .expect("category survives");
        daos.project()
            .find_project(project.id)
            .await
            .expect("project survives");
        let listing = daos.listing();
        assert_eq!(listing.supplies_for_project(project.id).await.expect("supplies").len(), 2);
        assert_eq!(listing.roadblocks_for_project(project.id).await.expect("roadblocks").len(), 1);
        assert_eq!(listing.comments_for_project(project.id).await.expect("comments").len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_category_is_not_found() {
        let db = memory_db().await;
        let err = CategoryDao::new(&db)
            .delete_category(999)
            .await
            .expect_err("missing category should fail");
        assert!(matches!(err, DaoLayerError::NotFound { id: 999, .. }));
    }

    #[tokio::test]
    async fn find_by_name_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("lookup failed".to_string())])
            .into_connection();
        let err = CategoryDao::new(&db)
            .find_by_name("Garden")
            .await
            .expect_err("lookup should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
