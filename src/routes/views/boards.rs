use std::sync::Arc;

use askama::Template;
use axum::{Router, extract::State, routing::get};

use crate::{
    db::entities::{roadblock, supply},
    response::{PageResult, render},
    services::ServiceContext,
    state::AppState,
};

use super::support::{ProjectGroup, group_by_project};

#[derive(Template)]
#[template(path = "help_wanted.html")]
struct HelpWantedTemplate {
    groups: Vec<ProjectGroup<roadblock::Model>>,
}

#[derive(Template)]
#[template(path = "supplies_needed.html")]
struct SuppliesNeededTemplate {
    groups: Vec<ProjectGroup<supply::Model>>,
    outstanding: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/help-wanted", get(help_wanted))
        .route("/supplies-needed", get(supplies_needed))
        .with_state(state)
}

async fn help_wanted(State(state): State<Arc<AppState>>) -> PageResult {
    let rows = ServiceContext::from_state(state.as_ref())
        .overview()
        .help_wanted()
        .await?;
    let groups = group_by_project(rows.into_iter().map(|row| (row.project, row.roadblock)));
    render(&HelpWantedTemplate { groups })
}

async fn supplies_needed(State(state): State<Arc<AppState>>) -> PageResult {
    let rows = ServiceContext::from_state(state.as_ref())
        .overview()
        .supplies_needed()
        .await?;
    let outstanding = rows.iter().filter(|row| !row.supply.checked).count();
    let groups = group_by_project(rows.into_iter().map(|row| (row.project, row.supply)));
    render(&SuppliesNeededTemplate {
        groups,
        outstanding,
    })
}
