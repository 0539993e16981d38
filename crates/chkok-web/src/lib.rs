//! chkok admin dashboard
//!
//! Leptos views over framework-agnostic controllers, plus the small axum
//! server that ships the bundle.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod components;
pub mod controllers;
pub mod pages;

#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;
#[cfg(not(target_arch = "wasm32"))]
pub mod routes;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod state;

// Re-export the main functions
pub use app::{App, AppContext};
#[cfg(not(target_arch = "wasm32"))]
pub use server::build_app;
#[cfg(not(target_arch = "wasm32"))]
pub use state::AppState;

use chkok_core::ApiConfig;

/// Where the server publishes the API endpoints for the bundle
pub const RUNTIME_CONFIG_PATH: &str = "/config.json";

/// Endpoints compiled into the bundle, used when the server publishes none
///
/// `CHKOK_API_BASE_URL` at build time overrides the default API root.
pub fn fallback_api_config() -> ApiConfig {
    let mut api = ApiConfig::default();
    if let Some(base_url) = option_env!("CHKOK_API_BASE_URL") {
        api.base_url = base_url.to_string();
    }
    api
}

/// Mount the dashboard into the document body
///
/// Endpoints come from [`RUNTIME_CONFIG_PATH`] on the serving origin, falling
/// back to [`fallback_api_config`] when that fetch fails.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
#[cfg(target_arch = "wasm32")]
pub async fn mount() -> chkok_core::Result<()> {
    use chkok_client::ApiClient;
    use chkok_core::SessionStore;
    use leptos::prelude::*;

    let api = match fetch_api_config().await {
        Ok(api) => api,
        Err(e) => {
            leptos::logging::warn!(
                "Failed to load {RUNTIME_CONFIG_PATH}: {e}, using built-in endpoints"
            );
            fallback_api_config()
        }
    };
    let client = ApiClient::new(api, SessionStore::new())?;

    leptos::mount::mount_to_body(move || view! { <App client=client /> });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_api_config() -> chkok_core::Result<ApiConfig> {
    use chkok_core::{Error, PublicApiConfig};

    let fetch_error = |e: gloo_net::Error| Error::Configuration {
        message: e.to_string(),
    };
    let published: PublicApiConfig = gloo_net::http::Request::get(RUNTIME_CONFIG_PATH)
        .send()
        .await
        .map_err(fetch_error)?
        .json()
        .await
        .map_err(fetch_error)?;
    published.into_api_config()
}

/// Browser entry point
#[cfg(target_arch = "wasm32")]
pub fn start() {
    // Already initialized is fine
    _ = leptos::task::Executor::init_wasm_bindgen();
    leptos::task::spawn_local(async {
        if let Err(e) = mount().await {
            leptos::logging::error!("Failed to start dashboard: {e}");
        }
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chkok_client::ApiClient;
    use chkok_core::{PublicApiConfig, SessionStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_endpoints_are_valid() {
        let api = fallback_api_config();
        assert!(api.validate().is_ok());
        assert_eq!(api.stats_path, ApiConfig::default().stats_path);
    }

    #[test]
    fn test_published_config_builds_client() {
        let published = PublicApiConfig::from(&fallback_api_config());
        let api = published.into_api_config().unwrap();

        assert!(ApiClient::new(api, SessionStore::new()).is_ok());
    }
}
