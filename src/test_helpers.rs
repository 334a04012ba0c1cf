use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection::{connect, ensure_schema_and_seed},
    routes::router,
    state::AppState,
};

/// Fresh in-memory SQLite database with the schema synced and types seeded.
pub async fn memory_db() -> DatabaseConnection {
    let db = connect(&DatabaseConfig::in_memory())
        .await
        .expect("open in-memory sqlite");
    ensure_schema_and_seed(&db)
        .await
        .expect("sync schema and seed types");
    db
}

pub async fn test_state() -> Arc<AppState> {
    let db = memory_db().await;
    let cfg = AppConfig {
        database: DatabaseConfig::in_memory(),
        ..AppConfig::default()
    };
    AppState::new(cfg, db)
}

pub fn test_router(state: &Arc<AppState>) -> Router {
    router(Arc::clone(state))
}
