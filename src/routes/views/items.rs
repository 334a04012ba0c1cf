//! Supplies, roadblocks and comments hanging off a project. Every mutation
//! redirects back to the owning project page.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, State},
    response::Redirect,
    routing::post,
};

use crate::{
    response::RedirectResult,
    routes::forms::{CommentForm, RoadblockForm, SupplyForm},
    services::{ServiceContext, project_service::ProjectService},
    state::AppState,
};

use super::support::project_path;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/project/{project_id}/supply/add", post(add_supply))
        .route("/supply/{supply_id}/toggle", post(toggle_supply))
        .route("/supply/{supply_id}/delete", post(delete_supply))
        .route("/project/{project_id}/roadblock/add", post(add_roadblock))
        .route("/roadblock/{roadblock_id}/delete", post(delete_roadblock))
        .route("/project/{project_id}/comment/add", post(add_comment))
        .route("/comment/{comment_id}/delete", post(delete_comment))
        .with_state(state)
}

fn project_service(state: &AppState) -> ProjectService {
    ServiceContext::from_state(state).project()
}

async fn add_supply(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    Form(form): Form<SupplyForm>,
) -> RedirectResult {
    project_service(state.as_ref())
        .add_supply(project_id, form.item.as_deref())
        .await?;
    Ok(Redirect::to(&project_path(project_id)))
}

async fn toggle_supply(
    State(state): State<Arc<AppState>>,
    Path(supply_id): Path<i32>,
) -> RedirectResult {
    let supply = project_service(state.as_ref())
        .toggle_supply(supply_id)
        .await?;
    Ok(Redirect::to(&project_path(supply.project_id)))
}

async fn delete_supply(
    State(state): State<Arc<AppState>>,
    Path(supply_id): Path<i32>,
) -> RedirectResult {
    let supply = project_service(state.as_ref())
        .delete_supply(supply_id)
        .await?;
    Ok(Redirect::to(&project_path(supply.project_id)))
}

async fn add_roadblock(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    Form(form): Form<RoadblockForm>,
) -> RedirectResult {
    project_service(state.as_ref())
        .add_roadblock(project_id, form.description.as_deref())
        .await?;
    Ok(Redirect::to(&project_path(project_id)))
}

async fn delete_roadblock(
    State(state): State<Arc<AppState>>,
    Path(roadblock_id): Path<i32>,
) -> RedirectResult {
    let roadblock = project_service(state.as_ref())
        .delete_roadblock(roadblock_id)
        .await?;
    Ok(Redirect::to(&project_path(roadblock.project_id)))
}

async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    Form(form): Form<CommentForm>,
) -> RedirectResult {
    project_service(state.as_ref())
        .add_comment(project_id, form.text.as_deref())
        .await?;
    Ok(Redirect::to(&project_path(project_id)))
}

async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<i32>,
) -> RedirectResult {
    let comment = project_service(state.as_ref())
        .delete_comment(comment_id)
        .await?;
    Ok(Redirect::to(&project_path(comment.project_id)))
}
