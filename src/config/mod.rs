pub mod configs;
pub mod defaults;
pub mod loader;
pub mod validate;

pub use configs::{AppConfig, DatabaseConfig, GeneralConfig, LoggingConfig};
pub use loader::LayeredConfig;
