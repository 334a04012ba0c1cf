use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::{dao::DaoContext, providers};
use crate::config::DatabaseConfig;

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    providers::connect(cfg).await
}

/// Creates any missing tables from the entity definitions and inserts the
/// default types when the type table is empty. Safe to call on every start.
pub async fn ensure_schema_and_seed(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("project_tracker::db::entities::*")
        .sync(db)
        .await
        .context("failed to sync database schema")?;

    let seeded = DaoContext::new(db)
        .project_type()
        .seed_defaults()
        .await
        .context("failed to seed default types")?;
    if seeded == 0 {
        info!("types already present, skipping seed");
    }
    Ok(())
}
