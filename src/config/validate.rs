use anyhow::{Result, bail};

use super::AppConfig;
use crate::db::providers::Backend;

/// Reports every problem at once instead of stopping at the first.
pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    let database = &cfg.database;
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    } else if let Err(err) = Backend::from_url(&database.url) {
        errors.push(format!("database.url: {err}"));
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if database.connect_timeout_secs == 0 {
        errors.push("database.connect_timeout_secs must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, DatabaseConfig};

    #[test]
    fn defaults_are_valid() {
        validate(&AppConfig::default()).expect("default config should validate");
        let cfg = AppConfig {
            database: DatabaseConfig::in_memory(),
            ..AppConfig::default()
        };
        validate(&cfg).expect("in-memory config should validate");
    }

    #[test]
    fn collects_every_problem() {
        let mut cfg = AppConfig::default();
        cfg.general.host = " ".to_string();
        cfg.database.url = "mysql://localhost/projects".to_string();
        cfg.database.max_connections = 1;
        cfg.database.min_idle = 4;

        let message = validate(&cfg).expect_err("config should be rejected").to_string();

        assert!(message.contains("general.host must not be empty"));
        assert!(message.contains("unsupported database url"));
        assert!(message.contains("database.min_idle (4)"));
    }
}
