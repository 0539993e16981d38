//! Process-wide session state, injected rather than global

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::types::Session;

/// Shared handle to the current [`Session`]
///
/// Created once at app start. Clones share the same underlying session: the
/// login flow writes it, the HTTP client reads it to sign requests.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Create a store holding an anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to attach to outgoing requests
    pub fn token(&self) -> Option<String> {
        self.inner.read().token().map(str::to_owned)
    }

    /// Whether the session is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    /// Replace the session with an authenticated one
    pub fn authenticate(&self, token: impl Into<String>) {
        *self.inner.write() = Session::authenticated(token);
        debug!("session authenticated");
    }

    /// Install a session issued by the server
    pub fn replace(&self, session: Session) {
        let authenticated = session.is_authenticated();
        *self.inner.write() = session;
        debug!(authenticated, "session replaced");
    }

    /// Drop the token, e.g. after a 401 or an explicit logout
    pub fn invalidate(&self) {
        let mut session = self.inner.write();
        if session.is_authenticated() {
            debug!("session invalidated");
        }
        *session = Session::anonymous();
    }
}
