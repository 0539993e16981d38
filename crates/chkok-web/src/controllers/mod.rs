//! View controllers: fetch, state transitions and error mapping for each screen
//!
//! Controllers know nothing about rendering. They talk to the outside world
//! through [`Notifier`] (toasts) and [`Navigator`] (route changes), so the
//! same logic drives the Leptos views and the headless tests.

pub mod login;
pub mod logout;
pub mod recorder;
pub mod stats_panel;

pub use login::{LoginController, LoginOutcome, LoginPhase};
pub use logout::logout;
pub use recorder::{RecordingNavigator, RecordingNotifier};
pub use stats_panel::{PanelState, StatsPanelController};

/// Navigation targets
pub mod routes {
    /// Login screen
    pub const LOGIN: &str = "/login";
    /// Post-login landing page
    pub const HOME: &str = "/";
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    /// Something went well
    Success,
    /// Informational
    Info,
    /// User input needs attention
    Warning,
    /// A request failed
    Error,
}

impl ToastLevel {
    /// CSS class for the toast container
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Info => "toast toast-info",
            Self::Warning => "toast toast-warning",
            Self::Error => "toast toast-error",
        }
    }
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Severity
    pub level: ToastLevel,
    /// Text shown to the user
    pub message: String,
}

impl Toast {
    /// Success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    /// Informational toast
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    /// Warning toast
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Warning,
            message: message.into(),
        }
    }

    /// Error toast
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

/// Surfaces notifications to the user
pub trait Notifier: Send + Sync {
    /// Show a toast
    fn notify(&self, toast: Toast);
}

/// Changes the current route
pub trait Navigator: Send + Sync {
    /// Navigate to `path`
    fn navigate(&self, path: &str);
}
