//! Backend-specific connection setup, chosen by the scheme of
//! `database.url`.

mod sqlite;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use self::sqlite::SqliteDbProvider;
use crate::config::DatabaseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self> {
        let normalized = url.trim().to_ascii_lowercase();
        if normalized.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else if normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
        {
            Ok(Self::Postgres)
        } else {
            bail!(
                "unsupported database url '{}'; expected sqlite: or postgres://",
                redact_url(url)
            )
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        }
    }

    fn provider(self) -> &'static dyn DbProvider {
        match self {
            Self::Sqlite => &SqliteDbProvider,
            Self::Postgres => &PostgresDbProvider,
        }
    }
}

/// Hooks around opening the pool for one backend.
pub trait DbProvider: Send + Sync {
    /// Runs before the pool opens.
    fn prepare(&self, _cfg: &DatabaseConfig) -> Result<()> {
        Ok(())
    }

    fn connect_options(&self, cfg: &DatabaseConfig) -> ConnectOptions {
        pool_options(cfg)
    }
}

struct PostgresDbProvider;

impl DbProvider for PostgresDbProvider {}

pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let backend = Backend::from_url(&cfg.url)?;
    let provider = backend.provider();
    info!(
        backend = backend.name(),
        url = %redact_url(&cfg.url),
        "connecting to database"
    );

    provider.prepare(cfg)?;
    Database::connect(provider.connect_options(cfg))
        .await
        .with_context(|| format!("failed to connect to {} database", backend.name()))
}

fn pool_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(cfg.url.trim().to_string());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    options
}

/// Keeps only the scheme so credentials never reach the logs.
pub(crate) fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
