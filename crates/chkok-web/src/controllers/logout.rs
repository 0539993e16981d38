//! Explicit logout from the shell header

use chkok_client::ApiClient;
use chkok_core::messages;
use tracing::warn;

use super::{Navigator, Notifier, Toast, routes};

/// End the session and return to the login screen
///
/// The server call is best-effort: the local session is invalidated whether
/// or not it succeeds.
pub async fn logout(client: &ApiClient, notifier: &dyn Notifier, navigator: &dyn Navigator) {
    if let Err(error) = client.logout().await {
        warn!(kind = ?error.kind(), "logout request failed, clearing local session anyway");
    }

    client.session().invalidate();
    notifier.notify(Toast::info(messages::LOGGED_OUT));
    navigator.navigate(routes::LOGIN);
}
