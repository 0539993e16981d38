//! HTTP handlers served alongside the static bundle

#![allow(clippy::unused_async)]

use axum::{Json, extract::State};
use chkok_core::PublicApiConfig;
use std::sync::Arc;

use crate::state::AppState;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Endpoints the bundle reads at startup
pub async fn runtime_config(State(state): State<Arc<AppState>>) -> Json<PublicApiConfig> {
    Json(PublicApiConfig::from(&state.config.api))
}
