use sea_orm::DatabaseConnection;

use super::{
    CategoryDao, CommentDao, DaoBase, ListingDao, ProjectDao, ProjectTypeDao, RoadblockDao,
    SupplyDao,
};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn category(&self) -> CategoryDao {
        DaoBase::new(&self.db)
    }

    pub fn project_type(&self) -> ProjectTypeDao {
        DaoBase::new(&self.db)
    }

    pub fn project(&self) -> ProjectDao {
        DaoBase::new(&self.db)
    }

    pub fn supply(&self) -> SupplyDao {
        DaoBase::new(&self.db)
    }

    pub fn roadblock(&self) -> RoadblockDao {
        DaoBase::new(&self.db)
    }

    pub fn comment(&self) -> CommentDao {
        DaoBase::new(&self.db)
    }

    pub fn listing(&self) -> ListingDao {
        ListingDao::new(&self.db)
    }
}
