use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{error::AppError, state::AppState};

use super::views;

pub const STATIC_PREFIX: &str = "/static";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(views::router(state))
        .route("/health", get(health))
        .nest_service(STATIC_PREFIX, ServeDir::new(resolve_public_dir()))
        .fallback(page_not_found)
}

async fn health() -> &'static str {
    "ok"
}

async fn page_not_found() -> AppError {
    AppError::not_found("Page not found")
}

fn resolve_public_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("APP_PUBLIC_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}
