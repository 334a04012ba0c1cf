use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod boards;
pub mod categories;
pub mod items;
pub mod projects;
pub mod settings;
mod support;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(categories::router(state.clone()))
        .merge(projects::router(state.clone()))
        .merge(items::router(state.clone()))
        .merge(boards::router(state.clone()))
        .merge(settings::router(state))
}
