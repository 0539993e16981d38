//! chkok admin dashboard binary
//!
//! Natively this serves the bundle; built for wasm32 it is the bundle.
#![forbid(unsafe_code)]

#[cfg(not(target_arch = "wasm32"))]
use chkok_core::{AppConfig, init_logging};
#[cfg(not(target_arch = "wasm32"))]
use chkok_web::build_app;
#[cfg(not(target_arch = "wasm32"))]
use std::net::{IpAddr, SocketAddr};
#[cfg(not(target_arch = "wasm32"))]
use tracing::{info, warn};

#[cfg(target_arch = "wasm32")]
fn main() {
    chkok_web::start();
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.logging)?;
    if let Some(e) = load_error {
        warn!("Failed to load config: {}, using defaults", e);
    }

    let host: IpAddr = config
        .web
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {}", config.web.host, e))?;
    let addr = SocketAddr::new(host, config.web.port);
    let static_dir = config.web.static_dir.clone();

    let app = build_app(config);

    info!(%addr, static_dir = %static_dir.display(), "Starting chkok web server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
