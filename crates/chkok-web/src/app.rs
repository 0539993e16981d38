//! Main Leptos application component with routing

use chkok_client::ApiClient;
use chkok_core::SessionStore;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::*, hooks::use_navigate, path};
use std::sync::Arc;

use crate::components::{Shell, ToastHost, ToastNotifier};
use crate::controllers::{LoginController, Navigator, StatsPanelController};
use crate::pages::{home::HomePage, login::LoginPage, not_found::NotFound};

/// [`Navigator`] that queues a path for the router to pick up
///
/// Controllers run outside the router's reactive scope, so navigation is
/// requested through a signal and performed by `NavigationBridge`.
#[derive(Debug, Clone, Copy)]
pub struct SignalNavigator {
    pending: RwSignal<Option<String>>,
}

impl SignalNavigator {
    /// Create a navigator with nothing queued
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }
}

impl Default for SignalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, path: &str) {
        self.pending.set(Some(path.to_string()));
    }
}

/// Shared services for every view, provided as context
#[derive(Debug, Clone)]
pub struct AppContext {
    /// API client; its session store is [`AppContext::session`]
    pub client: ApiClient,
    /// Current session
    pub session: SessionStore,
    /// Toast sink
    pub notifier: ToastNotifier,
    /// Route changes requested by controllers
    pub navigator: SignalNavigator,
}

impl AppContext {
    /// Wrap a client; must run inside a reactive owner
    pub fn new(client: ApiClient) -> Self {
        Self {
            session: client.session().clone(),
            client,
            notifier: ToastNotifier::new(),
            navigator: SignalNavigator::new(),
        }
    }

    /// Fresh controller for one login form
    pub fn login_controller(&self) -> LoginController {
        LoginController::new(
            self.client.clone(),
            Arc::new(self.notifier.clone()),
            Arc::new(self.navigator),
        )
    }

    /// Fresh controller for one statistics panel
    pub fn stats_panel_controller(&self) -> StatsPanelController {
        StatsPanelController::new(
            self.client.clone(),
            Arc::new(self.notifier.clone()),
            Arc::new(self.navigator),
        )
    }
}

/// Main application component
#[component]
pub fn App(client: ApiClient) -> impl IntoView {
    let context = AppContext::new(client);
    let navigator = context.navigator;
    provide_context(context.notifier.clone());
    provide_context(context);

    view! {
        <Router>
            <NavigationBridge navigator=navigator />
            <ToastHost />
            <Routes fallback=NotFound>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("") view=HomePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Performs navigation queued by a [`SignalNavigator`]
#[component]
fn NavigationBridge(navigator: SignalNavigator) -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(path) = navigator.pending.get() {
            navigator.pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::routes;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signal_navigator_queues_latest_path() {
        let owner = Owner::new();
        owner.with(|| {
            let navigator = SignalNavigator::new();
            navigator.navigate(routes::HOME);
            navigator.navigate(routes::LOGIN);

            assert_eq!(
                navigator.pending.get_untracked().as_deref(),
                Some(routes::LOGIN)
            );
        });
    }
}
