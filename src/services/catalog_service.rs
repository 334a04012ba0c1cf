use tracing::debug;

use crate::{
    db::dao::{CascadeSummary, CategoryDao, ListingDao, ProjectTypeDao},
    db::entities::{category, project_type},
    error::AppError,
};

/// Categories and types, the two lookup lists managed from the settings page.
#[derive(Clone)]
pub struct CatalogService {
    category_dao: CategoryDao,
    type_dao: ProjectTypeDao,
    listing_dao: ListingDao,
}

impl CatalogService {
    pub fn new(category_dao: CategoryDao, type_dao: ProjectTypeDao, listing_dao: ListingDao) -> Self {
        Self {
            category_dao,
            type_dao,
            listing_dao,
        }
    }

    pub async fn categories(&self) -> Result<Vec<category::Model>, AppError> {
        Ok(self.listing_dao.categories().await?)
    }

    pub async fn types(&self) -> Result<Vec<project_type::Model>, AppError> {
        Ok(self.listing_dao.types().await?)
    }

    pub async fn require_category(&self, id: i32) -> Result<category::Model, AppError> {
        Ok(self.category_dao.find_category(id).await?)
    }

    /// A blank or missing name is ignored and yields `Ok(None)`.
    pub async fn add_category(
        &self,
        name: Option<&str>,
    ) -> Result<Option<category::Model>, AppError> {
        let Some(name) = present(name) else {
            debug!("ignoring category without a name");
            return Ok(None);
        };
        Ok(Some(self.category_dao.create_category(name).await?))
    }

    pub async fn delete_category(&self, id: i32) -> Result<CascadeSummary, AppError> {
        Ok(self.category_dao.delete_category(id).await?)
    }

    /// A blank or missing name is ignored and yields `Ok(None)`.
    pub async fn add_type(
        &self,
        name: Option<&str>,
    ) -> Result<Option<project_type::Model>, AppError> {
        let Some(name) = present(name) else {
            debug!("ignoring type without a name");
            return Ok(None);
        };
        Ok(Some(self.type_dao.create_type(name).await?))
    }

    pub async fn delete_type(&self, id: i32) -> Result<(), AppError> {
        self.type_dao.delete_type(id).await?;
        Ok(())
    }
}

/// Trimmed value when it has any content.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
