use crate::{
    db::dao::{CategoryDao, ListingDao, RoadblockListing, SupplyListing},
    db::entities::{category, project},
    error::AppError,
};

/// Read paths that span several projects: a category's project list and the
/// system-wide roadblock and supply boards.
#[derive(Clone)]
pub struct OverviewService {
    category_dao: CategoryDao,
    listing_dao: ListingDao,
}

impl OverviewService {
    pub fn new(category_dao: CategoryDao, listing_dao: ListingDao) -> Self {
        Self {
            category_dao,
            listing_dao,
        }
    }

    pub async fn category_projects(
        &self,
        category_id: i32,
    ) -> Result<(category::Model, Vec<project::Model>), AppError> {
        let category = self.category_dao.find_category(category_id).await?;
        let projects = self.listing_dao.projects_by_category(category.id).await?;
        Ok((category, projects))
    }

    pub async fn help_wanted(&self) -> Result<Vec<RoadblockListing>, AppError> {
        Ok(self.listing_dao.roadblocks_across_projects().await?)
    }

    pub async fn supplies_needed(&self) -> Result<Vec<SupplyListing>, AppError> {
        Ok(self.listing_dao.supplies_across_projects().await?)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use crate::error::AppError;
    use crate::services::ServiceContext;
    use crate::test_helpers::memory_db;

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let db = memory_db().await;
        let err = ServiceContext::new(&db)
            .overview()
            .category_projects(5)
            .await
            .expect_err("missing category");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_boards_are_empty_lists() {
        let db = memory_db().await;
        let overview = ServiceContext::new(&db).overview();
        assert!(overview.help_wanted().await.expect("roadblocks").is_empty());
        assert!(overview.supplies_needed().await.expect("supplies").is_empty());
    }

    #[tokio::test]
    async fn database_failures_become_internal_errors() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let err = ServiceContext::new(&db)
            .overview()
            .help_wanted()
            .await
            .expect_err("query should fail");
        assert!(matches!(err, AppError::Internal(_)));
    }
}
