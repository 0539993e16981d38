//! Configuration management for the chkok admin dashboard

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Web server configuration
    #[serde(default)]
    pub web: WebConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Authentication endpoint
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Logout endpoint
    #[serde(default = "default_logout_path")]
    pub logout_path: String,

    /// User statistics endpoint
    #[serde(default = "default_stats_path")]
    pub stats_path: String,

    /// Header carrying the session token
    #[serde(default = "default_auth_header")]
    pub auth_header: String,

    /// Scheme prefixed to the token, empty for a bare token
    #[serde(default = "default_token_scheme")]
    pub token_scheme: String,

    /// Client-side request timeout in seconds; `None` leaves it to the network stack
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled single-page app
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_logout_path() -> String {
    "/logout".to_string()
}

fn default_stats_path() -> String {
    "/users/stats".to_string()
}

fn default_auth_header() -> String {
    "Authorization".to_string()
}

fn default_token_scheme() -> String {
    "Bearer".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./dist")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            logout_path: default_logout_path(),
            stats_path: default_stats_path(),
            auth_header: default_auth_header(),
            token_scheme: default_token_scheme(),
            request_timeout_secs: None,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ApiConfig {
    /// Join the base URL with an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Check the API section on its own
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        let host = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"));
        match host {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => {}
            _ => {
                return Err(Error::validation(
                    "api.base_url",
                    format!("'{base}' is not an absolute http(s) URL"),
                ));
            }
        }

        for (field, path) in [
            ("api.login_path", &self.login_path),
            ("api.logout_path", &self.logout_path),
            ("api.stats_path", &self.stats_path),
        ] {
            if !path.starts_with('/') {
                return Err(Error::validation(field, "must start with '/'"));
            }
        }

        if self.auth_header.trim().is_empty() {
            return Err(Error::validation("api.auth_header", "must not be empty"));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(Error::validation(
                "api.request_timeout_secs",
                "must be greater than zero when set",
            ));
        }

        Ok(())
    }
}

/// The part of [`ApiConfig`] the browser app fetches at startup
///
/// Endpoints only. Header naming and timeouts stay at their defaults on the
/// browser side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicApiConfig {
    /// Remote API root
    pub base_url: String,
    /// Login endpoint path
    pub login_path: String,
    /// Logout endpoint path
    pub logout_path: String,
    /// Statistics endpoint path
    pub stats_path: String,
}

impl From<&ApiConfig> for PublicApiConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            login_path: api.login_path.clone(),
            logout_path: api.logout_path.clone(),
            stats_path: api.stats_path.clone(),
        }
    }
}

impl PublicApiConfig {
    /// Full client configuration for these endpoints
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the published endpoints are unusable.
    pub fn into_api_config(self) -> Result<ApiConfig> {
        let api = ApiConfig {
            base_url: self.base_url,
            login_path: self.login_path,
            logout_path: self.logout_path,
            stats_path: self.stats_path,
            ..ApiConfig::default()
        };
        api.validate()?;
        Ok(api)
    }
}

/// `CHKOK_` variables, nested with `__`
fn environment() -> config::Environment {
    config::Environment::with_prefix("CHKOK")
        .prefix_separator("_")
        .separator("__")
}

impl AppConfig {
    /// Load configuration from `chkok.toml` (optional) and `CHKOK_*` environment variables
    ///
    /// Nested keys use a double underscore, e.g. `CHKOK_API__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> Result<Self> {
        Self::build(
            config::File::with_name("chkok").required(false),
            environment(),
        )
    }

    /// Load configuration from an explicit file, still honoring environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or the result fails validation.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(config::File::from(path.as_ref()).required(true), environment())
    }

    fn build<S>(file: S, env: config::Environment) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let loaded: Self = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Check the configuration for values the client cannot work with
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;

        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(Error::validation(
                "logging.format",
                format!("unknown format '{}'", self.logging.format),
            ));
        }

        Ok(())
    }
}
