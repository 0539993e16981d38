//! HTTP client for communicating with the chkok admin API

use chkok_core::{ApiConfig, Credentials, Envelope, Session, SessionStore, UserStatistics};
use reqwest::{Client, Method, RequestBuilder, Response, header::RETRY_AFTER};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Token payload returned by the login endpoint
#[derive(Debug, Deserialize)]
struct LoginPayload {
    #[serde(alias = "accessToken", alias = "access_token")]
    token: String,
}

/// API client for making HTTP requests to the admin API
///
/// One call to [`ApiClient::send`] is one attempt; nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new API client reading credentials from `session`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ApiConfig, session: SessionStore) -> chkok_core::Result<Self> {
        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut builder = Client::builder();
        // The fetch backend has no client-wide timeout.
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| chkok_core::Error::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    /// Session store used to sign requests
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }


    /// Send one request and decode a JSON response
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response arrives, the mapped
    /// status error for non-2xx responses and [`ApiError::Decode`] when the
    /// body does not deserialize into `T`.
    pub async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(&method, path, body).await?;

        let bytes = response.bytes().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%method, path, error = %e, "response body did not match the expected payload");
            ApiError::Decode {
                message: e.to_string(),
            }
        })
    }

    /// [`ApiClient::send`], abandoned as soon as `cancel` fires
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`] if the token fires first, otherwise
    /// whatever [`ApiClient::send`] returns.
    pub async fn send_cancellable<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        cancel: &CancellationToken,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(path, "request cancelled");
                Err(ApiError::Cancelled)
            }
            result = self.send(method, path, body) => result,
        }
    }

    /// Authenticate and return the session the server issued
    ///
    /// The caller decides whether to store it.
    ///
    /// # Errors
    ///
    /// Returns the classified error for any failed attempt.
    pub async fn login(
        &self,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> ApiResult<Session> {
        let envelope: Envelope<LoginPayload> = self
            .send_cancellable(Method::POST, &self.config.login_path, Some(credentials), cancel)
            .await?;

        Ok(Session::authenticated(envelope.data.token))
    }

    /// Tell the server the session is over
    ///
    /// # Errors
    ///
    /// Returns the classified error; the local session is left to the caller.
    pub async fn logout(&self) -> ApiResult<()> {
        // Any 2xx will do; the body is not inspected.
        self.dispatch::<()>(&Method::POST, &self.config.logout_path, None)
            .await?;
        Ok(())
    }

    /// Fetch the aggregate user statistics
    ///
    /// # Errors
    ///
    /// Returns the classified error for any failed attempt.
    pub async fn user_stats(&self, cancel: &CancellationToken) -> ApiResult<UserStatistics> {
        let envelope: Envelope<UserStatistics> = self
            .send_cancellable::<_, ()>(Method::GET, &self.config.stats_path, None, cancel)
            .await?;

        Ok(envelope.data)
    }

    /// Build, sign, send and classify one request
    async fn dispatch<B>(&self, method: &Method, path: &str, body: Option<&B>) -> ApiResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .client
            .request(method.clone(), self.config.endpoint(path));
        let mut request = self.attach_session(request);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "request failed without a response");
            ApiError::Network {
                message: e.to_string(),
            }
        })?;

        Self::classify(method, path, response)
    }

    /// Request interceptor: sign with the current session token
    fn attach_session(&self, request: RequestBuilder) -> RequestBuilder {
        let Some(token) = self.session.token() else {
            return request;
        };

        let value = if self.config.token_scheme.is_empty() {
            token
        } else {
            format!("{} {token}", self.config.token_scheme)
        };
        request.header(self.config.auth_header.as_str(), value)
    }

    /// Response interceptor: turn non-2xx responses into [`ApiError`]
    fn classify(method: &Method, path: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            debug!(%method, path, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let error = ApiError::from_status(status.as_u16(), retry_after);
        warn!(%method, path, status = status.as_u16(), kind = ?error.kind(), "request rejected");
        Err(error)
    }
}
