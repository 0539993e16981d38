//! Error taxonomy for remote API calls

use std::time::Duration;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Every way a request to the remote API can fail
///
/// Produced once at the client boundary; view controllers match on
/// [`ApiError::kind`] exhaustively.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400: the server rejected the request payload
    #[error("request rejected as malformed (HTTP 400)")]
    Validation,

    /// 401: the session token is missing, expired or invalid
    #[error("session expired or invalid (HTTP 401)")]
    AuthExpired,

    /// 403: authenticated but not allowed
    #[error("access forbidden (HTTP 403)")]
    Forbidden,

    /// 429: too many attempts
    #[error("rate limited (HTTP 429)")]
    RateLimited {
        /// Delay announced by the `Retry-After` header
        retry_after: Option<Duration>,
    },

    /// 500: the server failed to handle the request
    #[error("server error (HTTP 500)")]
    Server,

    /// No response was received
    #[error("network failure: {message}")]
    Network {
        /// Transport error description
        message: String,
    },

    /// Any other non-success status
    #[error("unexpected HTTP status {status}")]
    Unmapped {
        /// Status code returned
        status: u16,
    },

    /// A success response whose body did not match the expected payload
    #[error("invalid response body: {message}")]
    Decode {
        /// Parser error description
        message: String,
    },

    /// The request was abandoned through its cancellation token
    #[error("request cancelled")]
    Cancelled,
}

/// Fieldless discriminant of [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ApiError::Validation`]
    Validation,
    /// See [`ApiError::AuthExpired`]
    AuthExpired,
    /// See [`ApiError::Forbidden`]
    Forbidden,
    /// See [`ApiError::RateLimited`]
    RateLimited,
    /// See [`ApiError::Server`]
    Server,
    /// See [`ApiError::Network`]
    Network,
    /// See [`ApiError::Unmapped`]
    Unmapped(u16),
    /// See [`ApiError::Decode`]
    Decode,
    /// See [`ApiError::Cancelled`]
    Cancelled,
}

impl ApiError {
    /// Map a non-success HTTP status to its error
    pub const fn from_status(status: u16, retry_after: Option<Duration>) -> Self {
        match status {
            400 => Self::Validation,
            401 => Self::AuthExpired,
            403 => Self::Forbidden,
            429 => Self::RateLimited { retry_after },
            500 => Self::Server,
            status => Self::Unmapped { status },
        }
    }

    /// Discriminant for exhaustive matching
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation => ErrorKind::Validation,
            Self::AuthExpired => ErrorKind::AuthExpired,
            Self::Forbidden => ErrorKind::Forbidden,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Server => ErrorKind::Server,
            Self::Network { .. } => ErrorKind::Network,
            Self::Unmapped { status } => ErrorKind::Unmapped(*status),
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// HTTP status behind the error, if a response was received
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Validation => Some(400),
            Self::AuthExpired => Some(401),
            Self::Forbidden => Some(403),
            Self::RateLimited { .. } => Some(429),
            Self::Server => Some(500),
            Self::Unmapped { status } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } | Self::Cancelled => None,
        }
    }

    /// Whether the error means the session can no longer be used
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(400, ErrorKind::Validation)]
    #[case(401, ErrorKind::AuthExpired)]
    #[case(403, ErrorKind::Forbidden)]
    #[case(429, ErrorKind::RateLimited)]
    #[case(500, ErrorKind::Server)]
    #[case(404, ErrorKind::Unmapped(404))]
    #[case(502, ErrorKind::Unmapped(502))]
    #[case(418, ErrorKind::Unmapped(418))]
    fn test_from_status(#[case] status: u16, #[case] expected: ErrorKind) {
        let error = ApiError::from_status(status, None);

        assert_eq!(error.kind(), expected);
        assert_eq!(error.status(), Some(status));
    }

    #[test]
    fn test_rate_limited_keeps_retry_after() {
        let error = ApiError::from_status(429, Some(Duration::from_secs(900)));

        assert_eq!(
            error,
            ApiError::RateLimited {
                retry_after: Some(Duration::from_secs(900))
            }
        );
    }

    #[test]
    fn test_client_side_kinds_have_no_status() {
        let network = ApiError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(network.status(), None);
        assert_eq!(network.to_string(), "network failure: connection refused");

        assert_eq!(ApiError::Cancelled.status(), None);
        assert_eq!(ApiError::Cancelled.kind(), ErrorKind::Cancelled);
    }

    #[test]
    fn test_is_auth_expired() {
        assert!(ApiError::AuthExpired.is_auth_expired());
        assert!(!ApiError::Forbidden.is_auth_expired());
    }
}
