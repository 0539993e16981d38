//! Login form controller

use chkok_client::{ApiClient, ApiError, CancellationToken, ErrorKind};
use chkok_core::{Credentials, messages};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{Navigator, Notifier, Toast, routes};

/// Where the login form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginPhase {
    /// Waiting for input
    Idle,
    /// A login request is outstanding; the submit control is disabled
    Submitting,
    /// Authenticated and navigated away
    Succeeded,
}

/// Result of one [`LoginController::submit`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session stored and navigation to the landing page issued
    Succeeded,
    /// The server or network rejected the attempt
    Failed(ErrorKind),
    /// Another attempt was already outstanding; nothing was sent
    Busy,
    /// Email or password was blank; nothing was sent
    MissingFields,
    /// The controller was torn down while the request was outstanding
    Cancelled,
}

type PhaseListener = Arc<dyn Fn(LoginPhase) + Send + Sync>;

/// Drives the login form: `Idle → Submitting → {Succeeded, Idle}`
pub struct LoginController {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    phase: Mutex<LoginPhase>,
    listener: Option<PhaseListener>,
    cancel: CancellationToken,
}

impl fmt::Debug for LoginController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginController")
            .field("phase", &*self.phase.lock())
            .field("torn_down", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl LoginController {
    /// Create a controller writing to the client's session store
    pub fn new(
        client: ApiClient,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            notifier,
            navigator,
            phase: Mutex::new(LoginPhase::Idle),
            listener: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Observe every phase transition
    #[must_use]
    pub fn with_phase_listener(
        mut self,
        listener: impl Fn(LoginPhase) + Send + Sync + 'static,
    ) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Current phase
    pub fn phase(&self) -> LoginPhase {
        *self.phase.lock()
    }

    /// Whether the submit control should be disabled
    pub fn is_submitting(&self) -> bool {
        self.phase() == LoginPhase::Submitting
    }

    /// Attempt to log in
    ///
    /// At most one attempt is outstanding per controller; a concurrent call
    /// returns [`LoginOutcome::Busy`] without touching the network.
    pub async fn submit(&self, credentials: Credentials) -> LoginOutcome {
        if !credentials.is_complete() {
            self.notifier.notify(Toast::warning(messages::LOGIN_MISSING_FIELDS));
            return LoginOutcome::MissingFields;
        }

        if !self.begin() {
            debug!("login already in flight, ignoring submit");
            return LoginOutcome::Busy;
        }

        let result = self.client.login(&credentials, &self.cancel).await;
        drop(credentials);

        match result {
            Ok(session) => {
                self.client.session().replace(session);
                self.notifier.notify(Toast::success(messages::LOGIN_SUCCESS));
                self.transition(LoginPhase::Succeeded);
                info!("login succeeded");
                self.navigator.navigate(routes::HOME);
                LoginOutcome::Succeeded
            }
            Err(ApiError::Cancelled) => {
                // Torn down: no toast, no navigation.
                self.transition(LoginPhase::Idle);
                LoginOutcome::Cancelled
            }
            Err(error) => {
                let kind = error.kind();
                warn!(?kind, "login failed");

                if error.is_auth_expired() {
                    self.client.session().invalidate();
                }
                if let Some(message) = failure_message(&error) {
                    self.notifier.notify(Toast::error(message));
                }
                self.transition(LoginPhase::Idle);
                if error.is_auth_expired() {
                    self.navigator.navigate(routes::LOGIN);
                }
                LoginOutcome::Failed(kind)
            }
        }
    }

    /// Abandon any outstanding request; later responses are ignored
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    fn begin(&self) -> bool {
        {
            let mut phase = self.phase.lock();
            if *phase == LoginPhase::Submitting {
                return false;
            }
            *phase = LoginPhase::Submitting;
        }
        self.emit(LoginPhase::Submitting);
        true
    }

    fn transition(&self, next: LoginPhase) {
        *self.phase.lock() = next;
        self.emit(next);
    }

    fn emit(&self, phase: LoginPhase) {
        debug!(?phase, "login phase");
        if let Some(listener) = &self.listener {
            listener(phase);
        }
    }
}

impl Drop for LoginController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Message shown for a failed login attempt
fn failure_message(error: &ApiError) -> Option<String> {
    let message = match error {
        ApiError::Validation => messages::LOGIN_BAD_REQUEST.to_string(),
        ApiError::AuthExpired => messages::SESSION_EXPIRED.to_string(),
        ApiError::Forbidden => messages::LOGIN_FORBIDDEN.to_string(),
        ApiError::RateLimited { .. } => messages::LOGIN_RATE_LIMITED.to_string(),
        ApiError::Server => messages::LOGIN_SERVER_ERROR.to_string(),
        ApiError::Network { .. } => messages::NETWORK_ERROR.to_string(),
        ApiError::Decode { .. } => messages::INVALID_RESPONSE.to_string(),
        ApiError::Unmapped { status } => messages::unexpected_status(*status),
        ApiError::Cancelled => return None,
    };
    Some(message)
}
