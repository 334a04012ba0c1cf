//! Configuration sources, lowest priority first: serde defaults, an optional
//! TOML file, then `APP_`-prefixed environment variables where `__` separates
//! nested keys (`APP_DATABASE__URL`, `APP_GENERAL__PORT`).

use std::path::{Path, PathBuf};

use ::config as config_rs;
use anyhow::{Context, Result};
use config_rs::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::de::DeserializeOwned;

pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";
/// Points at a TOML file that must exist.
pub const CONFIG_FILE_VAR: &str = "APP_CONFIG_FILE";
/// Read from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "project_tracker.toml";

pub trait LayeredConfig: Sized + DeserializeOwned {
    fn check(&self) -> Result<()>;

    fn load() -> Result<Self> {
        load_dotenv();
        let builder = with_env(with_file(Config::builder(), config_file()));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg = builder
            .build()
            .context("failed to read config sources")?
            .try_deserialize::<Self>()
            .context("failed to deserialize config")?;
        cfg.check()?;
        Ok(cfg)
    }
}

fn load_dotenv() {
    let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    if dotenvy::from_path(manifest_env).is_err() {
        let _ = dotenvy::dotenv();
    }
}

/// The file named by [`CONFIG_FILE_VAR`] (required), else
/// [`DEFAULT_CONFIG_FILE`] when it exists.
fn config_file() -> Option<(PathBuf, bool)> {
    if let Some(path) = std::env::var_os(CONFIG_FILE_VAR) {
        return Some((PathBuf::from(path), true));
    }
    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    fallback.exists().then_some((fallback, false))
}

fn with_file(
    builder: ConfigBuilder<DefaultState>,
    file: Option<(PathBuf, bool)>,
) -> ConfigBuilder<DefaultState> {
    match file {
        Some((path, required)) => builder.add_source(
            File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(required),
        ),
        None => builder,
    }
}

fn with_env(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    )
}
