//! API-specific error types
//!
//! Classification matters more than message text here: callers route on the
//! category (log out on authentication failures, surface the payload for
//! HTTP errors, show a connectivity message for network failures).

use thiserror::Error;

/// Categories of API errors for caller-side handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Transport failures - no response was received
    Network,
    /// Session invalid - caller should treat the user as logged out
    Authentication,
    /// Any other non-2xx response
    Http,
    /// Request rejected client-side before sending
    Validation,
    /// A response arrived but could not be interpreted
    Decode,
    /// Client construction/configuration problems
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: the server was unreachable, the connection timed
    /// out, or the response never arrived. Never triggers a refresh and is
    /// never retried.
    #[error("network error: {0}")]
    Network(String),

    /// The session is no longer valid. Stored credentials may have been
    /// purged; the caller must return to an unauthenticated state.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Non-2xx response outside the refresh protocol, with the server's
    /// payload verbatim.
    #[error("server returned status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::Http { .. } => ApiErrorCategory::Http,
            Self::Validation(_) => ApiErrorCategory::Validation,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// True when the caller should treat the user as logged out.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// HTTP status code, when the server answered with one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
