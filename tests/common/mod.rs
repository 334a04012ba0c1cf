#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use tower::ServiceExt;

use project_tracker::{
    db::entities::category,
    services::ServiceContext,
    state::AppState,
    test_helpers::{test_router, test_state},
};

pub async fn app_state() -> Arc<AppState> {
    test_state().await
}

pub async fn send(state: &Arc<AppState>, request: Request<Body>) -> Response {
    test_router(state).oneshot(request).await.unwrap()
}

pub async fn get(state: &Arc<AppState>, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(state, request).await
}

pub async fn post_form(state: &Arc<AppState>, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(state, request).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Asserts a `303 See Other` and returns its `Location`.
pub fn redirect_target(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn add_category(state: &Arc<AppState>, name: &str) -> category::Model {
    let response = post_form(state, "/settings/category/add", &format!("name={name}")).await;
    assert_eq!(redirect_target(&response), "/settings");
    ServiceContext::from_state(state.as_ref())
        .catalog()
        .categories()
        .await
        .unwrap()
        .into_iter()
        .find(|category| category.name == name)
        .expect("category was created")
}

/// Creates a project through the form and returns its id from the redirect.
pub async fn add_project(state: &Arc<AppState>, category_id: i32, form: &str) -> i32 {
    let response = post_form(
        state,
        &format!("/category/{category_id}/project/new"),
        form,
    )
    .await;
    let location = redirect_target(&response);
    location
        .strip_prefix("/project/")
        .and_then(|id| id.parse().ok())
        .expect("redirect to the new project")
}
