use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::error::AppError;

pub type PageResult = Result<Html<String>, AppError>;
pub type RedirectResult = Result<Redirect, AppError>;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    status: u16,
    reason: &'a str,
    message: &'a str,
}

pub fn render<T: Template>(template: &T) -> PageResult {
    template
        .render()
        .map(Html)
        .map_err(|err| AppError::internal(format!("failed to render page: {err}")))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            log_app_error(&self, status);
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        error_page(status, self.message())
    }
}

pub(crate) fn error_page(status: StatusCode, message: &str) -> Response {
    let page = ErrorTemplate {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Error"),
        message,
    };
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(_) => (status, Html(message.to_string())).into_response(),
    }
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    tracing::error!(status = status.as_u16(), error = %err, "request failed");
}

fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Conflict(_) => StatusCode::CONFLICT,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
