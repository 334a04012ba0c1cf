use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        catalog_service::CatalogService, overview_service::OverviewService,
        project_service::ProjectService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(
            self.daos.category(),
            self.daos.project_type(),
            self.daos.listing(),
        )
    }

    pub fn project(&self) -> ProjectService {
        ProjectService::new(&self.daos)
    }

    pub fn overview(&self) -> OverviewService {
        OverviewService::new(self.daos.category(), self.daos.listing())
    }
}
