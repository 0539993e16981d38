//! Shared fixtures for the controller integration tests

#![allow(dead_code, clippy::unwrap_used)]

use chkok_client::ApiClient;
use chkok_core::{ApiConfig, SessionStore};
use chkok_web::controllers::{RecordingNavigator, RecordingNotifier};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::MockServer;

/// Client plus recorders wired to one mock API
pub struct Harness {
    pub client: ApiClient,
    pub session: SessionStore,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
}

impl Harness {
    /// Anonymous session against `server`
    pub fn new(server: &MockServer) -> Self {
        Self::with_session(server, SessionStore::new())
    }

    /// Authenticated session against `server`
    pub fn authenticated(server: &MockServer, token: &str) -> Self {
        let session = SessionStore::new();
        session.authenticate(token);
        Self::with_session(server, session)
    }

    /// Anonymous session against a port nothing listens on
    pub fn unreachable() -> Self {
        Self::with_base_url("http://127.0.0.1:1".to_string(), SessionStore::new())
    }

    fn with_session(server: &MockServer, session: SessionStore) -> Self {
        Self::with_base_url(server.uri(), session)
    }

    fn with_base_url(base_url: String, session: SessionStore) -> Self {
        let config = ApiConfig {
            base_url,
            ..ApiConfig::default()
        };
        Self {
            client: ApiClient::new(config, session.clone()).unwrap(),
            session,
            notifier: RecordingNotifier::new(),
            navigator: RecordingNavigator::new(),
        }
    }

    pub fn notifier(&self) -> Arc<RecordingNotifier> {
        Arc::new(self.notifier.clone())
    }

    pub fn navigator(&self) -> Arc<RecordingNavigator> {
        Arc::new(self.navigator.clone())
    }
}

/// Statistics payload as the API wraps it
pub fn stats_body(total: u64, client: u64, user: u64, active: u64, inactive: u64) -> Value {
    json!({
        "data": {
            "totalUsers": total,
            "clientCount": client,
            "userCount": user,
            "activeUsers": active,
            "inactiveUsers": inactive,
        }
    })
}

/// Login payload as the API wraps it
pub fn login_body(token: &str) -> Value {
    json!({ "data": { "token": token } })
}
