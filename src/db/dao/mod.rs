pub mod base;
pub mod base_traits;
mod cascade;
pub mod category_dao;
pub mod comment_dao;
mod context;
pub mod error;
pub mod listing_dao;
pub mod project_dao;
pub mod project_type_dao;
pub mod roadblock_dao;
pub mod supply_dao;

pub use base::DaoBase;
pub use base_traits::{CreationOrdered, TimestampedActiveModel};
pub use cascade::CascadeSummary;
pub use category_dao::CategoryDao;
pub use comment_dao::CommentDao;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use listing_dao::{ListingDao, ProjectDetail, RoadblockListing, SupplyListing};
pub use project_dao::{NewProject, ProjectDao, ProjectFields};
pub use project_type_dao::{DEFAULT_TYPES, ProjectTypeDao};
pub use roadblock_dao::RoadblockDao;
pub use supply_dao::SupplyDao;
