//! Layers wrapped around the whole router.

use std::any::Any;

use axum::{http::StatusCode, response::Response};
use tower_http::{
    catch_panic::CatchPanicLayer,
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{logging::panic_message, response::error_page};

type PanicResponder = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Turns a handler panic into the 500 error page. The panic itself is logged
/// by the hook installed in `logging`.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(panic_page as PanicResponder)
}

/// One `info` span per request with method, uri and final status.
pub fn request_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn panic_page(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = panic_message(panic.as_ref());

    // Debug builds show the panic text; release builds keep it server side.
    let message = if cfg!(debug_assertions) {
        format!("internal server error: {details}")
    } else {
        "internal server error".to_string()
    };
    error_page(StatusCode::INTERNAL_SERVER_ERROR, &message)
}
