pub mod catalog_service;
pub mod context;
pub mod overview_service;
pub mod project_service;

pub use context::ServiceContext;
