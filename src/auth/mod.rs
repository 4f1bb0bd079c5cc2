//! Authentication strategies for the BCX API.
//!
//! This module provides:
//! - HTTP Basic authentication with static credentials
//! - OAuth 2.0 bearer tokens with optional expiry
//!
//! A strategy never mutates after construction. Token refresh means
//! constructing a new [`Authentication`] value and swapping it into the
//! client via [`BcxClient::set_authentication`](crate::BcxClient::set_authentication).
//!
//! # Example
//!
//! ```
//! use bcx_client::auth::Authentication;
//! use chrono::{Duration, Utc};
//!
//! let basic = Authentication::basic("user@example.com", "p@$$w0rd!");
//! assert!(basic.is_valid());
//!
//! let bearer = Authentication::bearer_with_expiry(
//!     "access-token",
//!     Utc::now() + Duration::hours(1),
//! );
//! assert!(bearer.is_valid());
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::config::SecretString;

/// Authentication strategy for BCX API requests.
///
/// Each variant produces one `Authorization` header and a local validity
/// check. The set is closed; adding a strategy means adding a variant and
/// extending [`header_value`](Self::header_value) and
/// [`is_valid`](Self::is_valid), with no changes to the request engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    /// HTTP Basic authentication with username and password.
    ///
    /// Simpler for debugging and development; OAuth 2.0 is recommended for
    /// production use.
    Basic {
        /// Account username (usually an email address).
        username: String,
        /// Account password.
        password: SecretString,
    },

    /// OAuth 2.0 bearer token, optionally time-limited.
    Bearer {
        /// Opaque access token.
        access_token: SecretString,
        /// Instant after which the token is no longer usable.
        expires_at: Option<DateTime<Utc>>,
    },
}

impl Authentication {
    /// Create a Basic authentication strategy.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: SecretString::new(password),
        }
    }

    /// Create a bearer token strategy without expiry.
    #[must_use]
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self::Bearer {
            access_token: SecretString::new(access_token),
            expires_at: None,
        }
    }

    /// Create a bearer token strategy that expires at the given instant.
    #[must_use]
    pub fn bearer_with_expiry(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self::Bearer {
            access_token: SecretString::new(access_token),
            expires_at: Some(expires_at),
        }
    }

    /// The `Authorization` header value for this strategy.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic { username, password } => {
                let credentials =
                    STANDARD.encode(format!("{}:{}", username, password.expose()));
                format!("Basic {credentials}")
            }
            Self::Bearer { access_token, .. } => {
                format!("Bearer {}", access_token.expose())
            }
        }
    }

    /// Whether this strategy can still authenticate requests.
    ///
    /// Basic credentials carry no expiry concept and are always valid. A
    /// bearer token is valid if it has no expiry, or if the expiry lies
    /// strictly in the future at the instant of the call. An expiry equal
    /// to "now" counts as expired.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Basic { .. } => true,
            Self::Bearer { expires_at, .. } => {
                expires_at.is_none_or(|expires_at| expires_at > Utc::now())
            }
        }
    }

    /// Expiry instant for bearer tokens, if one was set.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Basic { .. } => None,
            Self::Bearer { expires_at, .. } => *expires_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_is_always_valid() {
        let auth = Authentication::basic("user@example.com", "secret");
        assert!(auth.is_valid());
    }

    #[test]
    fn test_basic_header_value_round_trips() {
        let auth = Authentication::basic("user@example.com", "p@$$w0rd!");
        let header = auth.header_value();

        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            "user@example.com:p@$$w0rd!"
        );
    }

    #[test]
    fn test_basic_header_value_known_encoding() {
        // base64("user:pass") == "dXNlcjpwYXNz"
        let auth = Authentication::basic("user", "pass");
        assert_eq!(auth.header_value(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_bearer_header_value() {
        let auth = Authentication::bearer("abc123");
        assert_eq!(auth.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_bearer_without_expiry_is_valid() {
        let auth = Authentication::bearer("abc123");
        assert!(auth.is_valid());
    }

    #[test]
    fn test_bearer_with_future_expiry_is_valid() {
        let auth = Authentication::bearer_with_expiry("abc123", Utc::now() + Duration::hours(1));
        assert!(auth.is_valid());
    }

    #[test]
    fn test_bearer_with_past_expiry_is_invalid() {
        let auth = Authentication::bearer_with_expiry("abc123", Utc::now() - Duration::hours(1));
        assert!(!auth.is_valid());
    }

    #[test]
    fn test_bearer_expiry_is_strict() {
        // An expiry at or before the evaluation instant counts as expired.
        let auth = Authentication::bearer_with_expiry("abc123", Utc::now());
        assert!(!auth.is_valid());
    }

    #[test]
    fn test_validity_reevaluated_per_call() {
        let auth =
            Authentication::bearer_with_expiry("abc123", Utc::now() + Duration::milliseconds(20));
        assert!(auth.is_valid());
        std::thread::sleep(std::time::Duration::from_millis(40));
        assert!(!auth.is_valid());
    }

    #[test]
    fn test_expires_at_accessor() {
        let expires_at = Utc::now() + Duration::days(14);
        let auth = Authentication::bearer_with_expiry("abc123", expires_at);
        assert_eq!(auth.expires_at(), Some(expires_at));
        assert_eq!(Authentication::bearer("abc123").expires_at(), None);
        assert_eq!(Authentication::basic("u", "p").expires_at(), None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let auth = Authentication::basic("user@example.com", "p@$$w0rd!");
        let debug = format!("{auth:?}");
        assert!(debug.contains("<REDACTED>"));
        assert!(!debug.contains("p@$$w0rd!"));

        let auth = Authentication::bearer("secret-token");
        let debug = format!("{auth:?}");
        assert!(!debug.contains("secret-token"));
    }
}
