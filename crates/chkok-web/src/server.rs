//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use chkok_core::AppConfig;
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the complete web application with all routes and state
///
/// Unknown paths fall back to `index.html` so client-side routes survive a
/// reload.
pub fn build_app(config: AppConfig) -> Router {
    let static_dir = config.web.static_dir.clone();
    let assets =
        ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));
    let state = Arc::new(AppState::new(config));

    build_routes()
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
