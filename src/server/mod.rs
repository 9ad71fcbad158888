//! HTTP surface: one nonce endpoint, one check endpoint, a health probe.
//! All routes are registered explicitly here at startup.

pub mod handlers;
pub mod nonce;
pub mod state;
pub mod types;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/v1/nonce", get(handlers::get_nonce))
        .route("/api/v1/check", post(handlers::check_availability))
        .with_state(state)
}

pub async fn run_server(bind_addr: &str, state: Arc<AppState>) -> crate::utils::error::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Shipping checker listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
