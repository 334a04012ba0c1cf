use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
};

use crate::{
    db::entities::{category, project_type},
    response::{PageResult, RedirectResult, render},
    routes::forms::NameForm,
    services::ServiceContext,
    state::AppState,
};

const SETTINGS_PATH: &str = "/settings";

#[derive(Template)]
#[template(path = "settings.html")]
struct SettingsTemplate {
    categories: Vec<category::Model>,
    types: Vec<project_type::Model>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(SETTINGS_PATH, get(settings))
        .route("/settings/category/add", post(add_category))
        .route("/settings/category/{category_id}/delete", post(delete_category))
        .route("/settings/type/add", post(add_type))
        .route("/settings/type/{type_id}/delete", post(delete_type))
        .with_state(state)
}

async fn settings(State(state): State<Arc<AppState>>) -> PageResult {
    let catalog = ServiceContext::from_state(state.as_ref()).catalog();
    let categories = catalog.categories().await?;
    let types = catalog.types().await?;
    render(&SettingsTemplate { categories, types })
}

async fn add_category(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NameForm>,
) -> RedirectResult {
    ServiceContext::from_state(state.as_ref())
        .catalog()
        .add_category(form.name.as_deref())
        .await?;
    Ok(Redirect::to(SETTINGS_PATH))
}

async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> RedirectResult {
    ServiceContext::from_state(state.as_ref())
        .catalog()
        .delete_category(category_id)
        .await?;
    Ok(Redirect::to(SETTINGS_PATH))
}

async fn add_type(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NameForm>,
) -> RedirectResult {
    ServiceContext::from_state(state.as_ref())
        .catalog()
        .add_type(form.name.as_deref())
        .await?;
    Ok(Redirect::to(SETTINGS_PATH))
}

async fn delete_type(
    State(state): State<Arc<AppState>>,
    Path(type_id): Path<i32>,
) -> RedirectResult {
    ServiceContext::from_state(state.as_ref())
        .catalog()
        .delete_type(type_id)
        .await?;
    Ok(Redirect::to(SETTINGS_PATH))
}
