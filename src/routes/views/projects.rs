use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
};

use crate::{
    db::entities::{comment, project, roadblock, supply},
    response::{PageResult, RedirectResult, render},
    routes::forms::ProjectForm,
    services::ServiceContext,
    state::AppState,
};

use super::support::{CategoryOption, category_options, display_time, project_path, type_names};

#[derive(Template)]
#[template(path = "new_project.html")]
struct NewProjectTemplate {
    categories: Vec<CategoryOption>,
    types: Vec<String>,
    form_action: String,
}

struct CommentRow {
    id: i32,
    text: String,
    created: String,
}

impl From<comment::Model> for CommentRow {
    fn from(comment: comment::Model) -> Self {
        Self {
            created: display_time(&comment.created_at),
            id: comment.id,
            text: comment.text,
        }
    }
}

#[derive(Template)]
#[template(path = "project.html")]
struct ProjectTemplate {
    project: project::Model,
    category_name: String,
    created: String,
    categories: Vec<CategoryOption>,
    types: Vec<String>,
    supplies: Vec<supply::Model>,
    roadblocks: Vec<roadblock::Model>,
    comments: Vec<CommentRow>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/project/new", get(new_project_page).post(create_project))
        .route(
            "/category/{category_id}/project/new",
            get(new_project_in_category_page).post(create_project_in_category),
        )
        .route("/project/{project_id}", get(view_project))
        .route("/project/{project_id}/edit", post(edit_project))
        .route("/project/{project_id}/delete", post(delete_project))
        .with_state(state)
}

async fn new_project_page(State(state): State<Arc<AppState>>) -> PageResult {
    new_project_form(state.as_ref(), None).await
}

async fn new_project_in_category_page(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> PageResult {
    new_project_form(state.as_ref(), Some(category_id)).await
}

async fn new_project_form(state: &AppState, category_id: Option<i32>) -> PageResult {
    let catalog = ServiceContext::from_state(state).catalog();
    if let Some(id) = category_id {
        catalog.require_category(id).await?;
    }
    let categories = catalog.categories().await?;
    let types = catalog.types().await?;
    let form_action = match category_id {
        Some(id) => format!("/category/{id}/project/new"),
        None => "/project/new".to_string(),
    };

    render(&NewProjectTemplate {
        categories: category_options(categories, category_id),
        types: type_names(types),
        form_action,
    })
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProjectForm>,
) -> RedirectResult {
    create_from_form(state.as_ref(), &form).await
}

async fn create_project_in_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
    Form(mut form): Form<ProjectForm>,
) -> RedirectResult {
    if form.category_id.is_none() {
        form.category_id = Some(category_id.to_string());
    }
    create_from_form(state.as_ref(), &form).await
}

async fn create_from_form(state: &AppState, form: &ProjectForm) -> RedirectResult {
    let project = ServiceContext::from_state(state)
        .project()
        .create_project(
            form.input(),
            form.supplies.as_deref(),
            form.comments.as_deref(),
        )
        .await?;
    Ok(Redirect::to(&project_path(project.id)))
}

async fn view_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
) -> PageResult {
    let services = ServiceContext::from_state(state.as_ref());
    let detail = services.project().detail(project_id).await?;
    let catalog = services.catalog();
    let categories = catalog.categories().await?;
    let types = catalog.types().await?;

    let created = display_time(&detail.project.created_at);
    let categories = category_options(categories, Some(detail.project.category_id));
    render(&ProjectTemplate {
        project: detail.project,
        category_name: detail.category.name,
        created,
        categories,
        types: type_names(types),
        supplies: detail.supplies,
        roadblocks: detail.roadblocks,
        comments: detail.comments.into_iter().map(CommentRow::from).collect(),
    })
}

async fn edit_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    Form(form): Form<ProjectForm>,
) -> RedirectResult {
    let project = ServiceContext::from_state(state.as_ref())
        .project()
        .update_project(project_id, form.input())
        .await?;
    Ok(Redirect::to(&project_path(project.id)))
}

async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
) -> RedirectResult {
    ServiceContext::from_state(state.as_ref())
        .project()
        .delete_project(project_id)
        .await?;
    Ok(Redirect::to("/"))
}
