use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::core::{ConfigProvider, FactSource};
use crate::utils::error::{ClassifierError, Result};

pub fn build_router<S: FactSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/classify-number", get(handlers::classify_number::<S>))
        .route("/health", get(handlers::health::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let state = AppState::from_config(config)?;
    let router = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(bind_addr).await?;

    info!(
        %bind_addr,
        trivia = config.trivia_base_url(),
        cache_capacity = config.cache_capacity(),
        "number classifier listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClassifierError::InternalError {
            message: format!("server error: {}", e),
        })?;

    info!("number classifier shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
