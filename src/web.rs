//! Liveness endpoint.
//!
//! Runs beside the bot client as an independent task with no shared state,
//! answering platform health checks.

use axum::{routing::get, Router};

use crate::error::AppError;

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

/// Binds the listener and serves the health router until shutdown.
///
/// # Arguments
/// - `bind_addr` - Socket address to listen on, e.g. `0.0.0.0:3000`
///
/// # Returns
/// - `Err(AppError)` - Bind or serve failure
pub async fn serve(bind_addr: &str) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("Health endpoint listening on {}", bind_addr);

    axum::serve(listener, router()).await?;

    Ok(())
}
