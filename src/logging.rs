use std::{any::Any, backtrace::Backtrace};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs the global subscriber. `RUST_LOG`, when set, replaces
/// `logging.rust_log`. Later calls are no-ops.
pub fn init_tracing(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.rust_log.as_str()));
    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(cfg.ansi)
        .try_init();
    if installed.is_ok() {
        std::panic::set_hook(Box::new(log_panic));
    }
}

/// Text carried by a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic")
}

fn log_panic(info: &std::panic::PanicHookInfo<'_>) {
    let message = panic_message(info.payload());
    let backtrace = Backtrace::capture();
    match info.location() {
        Some(location) => tracing::error!(
            panic = %message,
            location = %location,
            backtrace = %backtrace,
            "panic"
        ),
        None => tracing::error!(panic = %message, backtrace = %backtrace, "panic"),
    }
}
