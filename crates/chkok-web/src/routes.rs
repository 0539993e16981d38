//! Route definitions for the SPA server

use crate::{RUNTIME_CONFIG_PATH, handlers, state::AppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Routes answered by the server itself; everything else is a static asset
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(RUNTIME_CONFIG_PATH, get(handlers::runtime_config))
        .route("/health", get(handlers::health_check))
}
