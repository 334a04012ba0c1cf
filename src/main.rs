use std::sync::Arc;

use anyhow::Context;
use axum::Router;

use project_tracker::{
    config::{AppConfig, LoggingConfig},
    db::connection,
    logging::init_tracing,
    middleware::{catch_panic_layer, request_trace_layer},
    routes::router,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(err) => {
            init_tracing(&LoggingConfig::default());
            return Err(err.context("failed to load config"));
        }
    };
    init_tracing(&cfg.logging);

    let db = connection::connect(&cfg.database).await?;
    connection::ensure_schema_and_seed(&db).await?;

    let state = AppState::new(cfg, db);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(catch_panic_layer())
        .layer(request_trace_layer());

    let (host, port) = state.config.general.listen_addr();
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
