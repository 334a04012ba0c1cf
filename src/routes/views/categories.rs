use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    db::entities::{category, project},
    response::{PageResult, render},
    services::ServiceContext,
    state::AppState,
};

use super::support::display_time;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    categories: Vec<category::Model>,
}

struct ProjectRow {
    id: i32,
    name: String,
    tag: String,
    implement: String,
    created: String,
}

impl From<project::Model> for ProjectRow {
    fn from(project: project::Model) -> Self {
        Self {
            created: display_time(&project.created_at),
            id: project.id,
            name: project.name,
            tag: project.tag,
            implement: project.implement,
        }
    }
}

#[derive(Template)]
#[template(path = "category.html")]
struct CategoryTemplate {
    category: category::Model,
    projects: Vec<ProjectRow>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/category/{category_id}", get(view_category))
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> PageResult {
    let categories = ServiceContext::from_state(state.as_ref())
        .catalog()
        .categories()
        .await?;
    render(&IndexTemplate { categories })
}

async fn view_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> PageResult {
    let (category, projects) = ServiceContext::from_state(state.as_ref())
        .overview()
        .category_projects(category_id)
        .await?;
    render(&CategoryTemplate {
        category,
        projects: projects.into_iter().map(ProjectRow::from).collect(),
    })
}
