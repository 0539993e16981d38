//! User statistics panel controller

use chkok_client::{ApiClient, ApiError, CancellationToken, ErrorKind};
use chkok_core::{ChartRecord, UserStatistics, chart_records, messages};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{Navigator, Notifier, Toast, routes};

/// What the panel currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    /// Not mounted
    Idle,
    /// Fetch outstanding; spinner shown
    Loading,
    /// Statistics received; chart shown
    Loaded {
        /// Raw payload
        stats: UserStatistics,
        /// One record per category, in chart order
        records: [ChartRecord; 5],
    },
    /// Fetch failed; neither spinner nor chart is shown
    Failed(ErrorKind),
}

impl PanelState {
    /// Chart data, when loaded
    pub const fn records(&self) -> Option<&[ChartRecord; 5]> {
        match self {
            Self::Loaded { records, .. } => Some(records),
            _ => None,
        }
    }

    /// Whether the spinner should be visible
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

type StateListener = Arc<dyn Fn(&PanelState) + Send + Sync>;

struct Inner {
    state: PanelState,
    inflight: Option<CancellationToken>,
}

/// Drives the statistics panel: `Loading → {Loaded, Failed}` on every mount
pub struct StatsPanelController {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<Inner>,
    listener: Option<StateListener>,
}

impl fmt::Debug for StatsPanelController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("StatsPanelController")
            .field("state", &inner.state)
            .field("inflight", &inner.inflight.is_some())
            .finish_non_exhaustive()
    }
}

impl StatsPanelController {
    /// Create an unmounted controller
    pub fn new(
        client: ApiClient,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            notifier,
            navigator,
            inner: Mutex::new(Inner {
                state: PanelState::Idle,
                inflight: None,
            }),
            listener: None,
        }
    }

    /// Observe every state change
    #[must_use]
    pub fn with_state_listener(
        mut self,
        listener: impl Fn(&PanelState) + Send + Sync + 'static,
    ) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Current state
    pub fn state(&self) -> PanelState {
        self.inner.lock().state.clone()
    }

    /// Fetch fresh statistics, replacing whatever the panel held
    ///
    /// A mount that is superseded by another mount or by [`unmount`] before
    /// its response arrives leaves the state untouched.
    ///
    /// [`unmount`]: StatsPanelController::unmount
    pub async fn mount(&self) -> PanelState {
        let token = CancellationToken::new();
        {
            let mut inner = self.inner.lock();
            if let Some(previous) = inner.inflight.replace(token.clone()) {
                previous.cancel();
            }
            inner.state = PanelState::Loading;
        }
        self.emit(&PanelState::Loading);
        debug!("statistics panel mounted, fetching");

        let result = self.client.user_stats(&token).await;

        let next = {
            let mut inner = self.inner.lock();
            if token.is_cancelled() {
                debug!("discarding stale statistics response");
                return inner.state.clone();
            }
            inner.inflight = None;
            inner.state = match &result {
                Ok(stats) => PanelState::Loaded {
                    stats: *stats,
                    records: chart_records(stats),
                },
                Err(error) => PanelState::Failed(error.kind()),
            };
            inner.state.clone()
        };

        match result {
            Ok(stats) => info!(total_users = stats.total_users, "statistics loaded"),
            Err(error) => self.report(&error),
        }
        self.emit(&next);
        next
    }

    /// Cancel any outstanding fetch and return to [`PanelState::Idle`]
    pub fn unmount(&self) {
        let mut inner = self.inner.lock();
        if let Some(token) = inner.inflight.take() {
            token.cancel();
        }
        inner.state = PanelState::Idle;
    }

    fn report(&self, error: &ApiError) {
        warn!(kind = ?error.kind(), "statistics fetch failed");

        let message = match error {
            ApiError::AuthExpired => {
                self.client.session().invalidate();
                messages::SESSION_EXPIRED.to_string()
            }
            ApiError::Forbidden => messages::STATS_ADMIN_ONLY.to_string(),
            ApiError::Server => messages::STATS_DATABASE_ERROR.to_string(),
            ApiError::Network { .. } => messages::NETWORK_ERROR.to_string(),
            ApiError::Decode { .. } => messages::INVALID_RESPONSE.to_string(),
            ApiError::Validation | ApiError::RateLimited { .. } | ApiError::Unmapped { .. } => {
                messages::unexpected_status(error.status().unwrap_or_default())
            }
            ApiError::Cancelled => return,
        };

        self.notifier.notify(Toast::error(message));
        if error.is_auth_expired() {
            self.navigator.navigate(routes::LOGIN);
        }
    }

    fn emit(&self, state: &PanelState) {
        if let Some(listener) = &self.listener {
            listener(state);
        }
    }
}

impl Drop for StatsPanelController {
    fn drop(&mut self) {
        if let Some(token) = self.inner.get_mut().inflight.take() {
            token.cancel();
        }
    }
}
