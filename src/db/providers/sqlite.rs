use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use sea_orm::ConnectOptions;
use tracing::info;

use super::{DbProvider, pool_options};
use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

pub(super) struct SqliteDbProvider;

impl DbProvider for SqliteDbProvider {
    /// `mode=rwc` creates the file but not its directory.
    fn prepare(&self, cfg: &DatabaseConfig) -> Result<()> {
        let Some(path) = sqlite_file_path(&cfg.url) else {
            return Ok(());
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }
        info!(path = %path.display(), "using sqlite database file");
        Ok(())
    }

    /// Pragmas go on the connect options so every pooled connection gets them.
    fn connect_options(&self, cfg: &DatabaseConfig) -> ConnectOptions {
        let mut options = pool_options(cfg);
        options.map_sqlx_sqlite_opts(|opts| {
            opts.foreign_keys(true)
                .busy_timeout(Duration::from_millis(SQLITE_BUSY_TIMEOUT_MS))
        });
        options
    }
}

/// File backing a `sqlite:` url, or `None` for in-memory databases.
fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}
