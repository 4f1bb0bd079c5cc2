//! Error types for the BCX API client.
//!
//! This module defines the error taxonomy for the crate:
//! - [`ApiError`]: request/authentication failures surfaced by the client
//! - [`ConfigError`]: environment configuration errors
//!
//! All classification happens inside the request engine; resource methods
//! and callers only ever see these types, never raw transport errors.
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Errors returned by the BCX API client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The configured authentication strategy failed its local validity
    /// check. Raised before any network call is made.
    #[error("Authentication token is invalid or expired")]
    TokenInvalid,

    /// The service rejected the request with HTTP 401.
    #[error("Authentication failed")]
    AuthenticationFailed {
        /// HTTP status code (always 401).
        status: u16,
    },

    /// The service answered with a non-success status other than 401.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Short description of the failure.
        message: String,
        /// Raw response body, empty if the body could not be read.
        body: String,
    },

    /// The request could not be constructed, e.g. a custom header with an
    /// invalid name or value.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },

    /// Request timed out before a response arrived.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Network-level failure with no HTTP response at all.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// A 2xx response carried a body that is not valid JSON.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

impl ApiError {
    /// Returns true if this error is an authentication failure, local or
    /// remote.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::TokenInvalid | Self::AuthenticationFailed { .. })
    }

    /// HTTP status code carried by this error, if the service responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { status } | Self::RequestFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Raw response body carried by this error, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Environment configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
