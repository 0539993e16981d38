//! SPA server routes

#![allow(clippy::unwrap_used)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chkok_core::{AppConfig, PublicApiConfig};
use chkok_web::{RUNTIME_CONFIG_PATH, build_app};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tower::ServiceExt;

fn config_with_static_dir() -> (AppConfig, TempDir) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>chkok</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('chkok')").unwrap();

    let mut config = AppConfig::default();
    config.web.static_dir = dir.path().to_path_buf();
    (config, dir)
}

async fn get(config: AppConfig, uri: &str) -> (StatusCode, String) {
    let response = build_app(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let (config, _dir) = config_with_static_dir();

    let (status, body) = get(config, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_runtime_config_exposes_api_paths_only() {
    let (mut config, _dir) = config_with_static_dir();
    config.api.base_url = "https://api.example.com/v1".to_string();

    let (status, body) = get(config, RUNTIME_CONFIG_PATH).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "baseUrl": "https://api.example.com/v1",
            "loginPath": "/login",
            "logoutPath": "/logout",
            "statsPath": "/users/stats",
        })
    );

    let api = serde_json::from_str::<PublicApiConfig>(&body)
        .unwrap()
        .into_api_config()
        .unwrap();
    assert_eq!(api.base_url, "https://api.example.com/v1");
}

#[tokio::test]
async fn test_static_asset_is_served() {
    let (config, _dir) = config_with_static_dir();

    let (status, body) = get(config, "/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('chkok')");
}

#[tokio::test]
async fn test_client_route_falls_back_to_index() {
    let (config, _dir) = config_with_static_dir();

    let (status, body) = get(config, "/login").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>chkok</html>");
}
