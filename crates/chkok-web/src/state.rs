//! Server state

use chkok_core::AppConfig;

/// Configuration shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    /// Create new application state
    pub const fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
