//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Secure credential storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use bcx_client::config::{Config, SecretString};
//! use bcx_client::Authentication;
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     account_id: "999999999".to_string(),
//!     authentication: Authentication::bearer("access-token"),
//!     request_timeout_ms: 30_000,
//! };
//!
//! // Credentials are protected from accidental logging
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("access-token"));
//! ```

mod secret;

pub use secret::SecretString;

use crate::auth::Authentication;
use crate::client::ClientConfig;
use crate::error::ConfigError;

/// Environment variable holding the account identifier.
pub const ENV_ACCOUNT_ID: &str = "BASECAMP_ACCOUNT_ID";
/// Environment variable holding an OAuth access token.
pub const ENV_ACCESS_TOKEN: &str = "BASECAMP_ACCESS_TOKEN";
/// Environment variable holding a Basic-auth username.
pub const ENV_USERNAME: &str = "BASECAMP_USERNAME";
/// Environment variable holding a Basic-auth password.
pub const ENV_PASSWORD: &str = "BASECAMP_PASSWORD";
/// Environment variable overriding the request timeout.
pub const ENV_REQUEST_TIMEOUT_MS: &str = "BASECAMP_REQUEST_TIMEOUT_MS";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
/// Minimum accepted request timeout.
pub const MIN_TIMEOUT_MS: u64 = 1_000;
/// Maximum accepted request timeout.
pub const MAX_TIMEOUT_MS: u64 = 600_000;

/// Application configuration loaded from the environment.
///
/// An access token takes precedence over username/password when both are
/// present. Token expiry cannot be expressed through the environment; a
/// token loaded here never expires locally and relies on the service's 401
/// to signal staleness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Account identifier, inserted verbatim into request URLs.
    pub account_id: String,
    /// Authentication strategy built from the supplied credentials.
    pub authentication: Authentication,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `BASECAMP_ACCOUNT_ID`
    /// - either `BASECAMP_ACCESS_TOKEN`, or both `BASECAMP_USERNAME` and
    ///   `BASECAMP_PASSWORD`
    ///
    /// Optional:
    /// - `BASECAMP_REQUEST_TIMEOUT_MS` (default: `30000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let account_id = lookup(ENV_ACCOUNT_ID)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingRequired {
                var: ENV_ACCOUNT_ID.to_string(),
            })?;

        let authentication = match lookup(ENV_ACCESS_TOKEN).filter(|v| !v.is_empty()) {
            Some(token) => Authentication::bearer(token),
            None => {
                let username = lookup(ENV_USERNAME).filter(|v| !v.is_empty());
                let password = lookup(ENV_PASSWORD).filter(|v| !v.is_empty());
                match (username, password) {
                    (Some(username), Some(password)) => Authentication::basic(username, password),
                    _ => {
                        return Err(ConfigError::MissingRequired {
                            var: format!("{ENV_ACCESS_TOKEN} or {ENV_USERNAME}/{ENV_PASSWORD}"),
                        })
                    }
                }
            }
        };

        let request_timeout_ms = match lookup(ENV_REQUEST_TIMEOUT_MS) {
            Some(raw) => {
                let parsed = raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    var: ENV_REQUEST_TIMEOUT_MS.to_string(),
                    reason: "must be a positive integer".to_string(),
                })?;
                if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&parsed) {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_REQUEST_TIMEOUT_MS.to_string(),
                        reason: format!(
                            "must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}"
                        ),
                    });
                }
                parsed
            }
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            account_id,
            authentication,
            request_timeout_ms,
        })
    }

    /// Client configuration with this timeout applied.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().with_timeout_ms(self.request_timeout_ms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |var| map.get(var).map(ToString::to_string)
    }

    #[test]
    fn test_from_lookup_with_access_token() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, "999999999"),
            (ENV_ACCESS_TOKEN, "token-123"),
        ]))
        .unwrap();

        assert_eq!(config.account_id, "999999999");
        assert_eq!(config.authentication, Authentication::bearer("token-123"));
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn test_from_lookup_with_basic_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, "999999999"),
            (ENV_USERNAME, "user@example.com"),
            (ENV_PASSWORD, "p@$$w0rd!"),
        ]))
        .unwrap();

        assert_eq!(
            config.authentication,
            Authentication::basic("user@example.com", "p@$$w0rd!")
        );
    }

    #[test]
    fn test_access_token_takes_precedence() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, "999999999"),
            (ENV_ACCESS_TOKEN, "token-123"),
            (ENV_USERNAME, "user@example.com"),
            (ENV_PASSWORD, "p@$$w0rd!"),
        ]))
        .unwrap();

        assert_eq!(config.authentication, Authentication::bearer("token-123"));
    }

    #[test]
    fn test_missing_account_id() {
        let err = Config::from_lookup(lookup_from(&[(ENV_ACCESS_TOKEN, "token-123")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingRequired {
                var: ENV_ACCOUNT_ID.to_string()
            }
        );
    }

    #[test]
    fn test_empty_account_id_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, ""),
            (ENV_ACCESS_TOKEN, "token-123"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }

    #[test]
    fn test_missing_credentials() {
        let err =
            Config::from_lookup(lookup_from(&[(ENV_ACCOUNT_ID, "999999999")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }

    #[test]
    fn test_username_without_password_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, "999999999"),
            (ENV_USERNAME, "user@example.com"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }

    #[test]
    fn test_timeout_override() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, "999999999"),
            (ENV_ACCESS_TOKEN, "token-123"),
            (ENV_REQUEST_TIMEOUT_MS, "60000"),
        ]))
        .unwrap();

        assert_eq!(config.request_timeout_ms, 60_000);
        assert_eq!(config.client_config().timeout_ms, 60_000);
    }

    #[test]
    fn test_timeout_not_a_number() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, "999999999"),
            (ENV_ACCESS_TOKEN, "token-123"),
            (ENV_REQUEST_TIMEOUT_MS, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_timeout_out_of_bounds() {
        for raw in ["999", "600001"] {
            let err = Config::from_lookup(lookup_from(&[
                (ENV_ACCOUNT_ID, "999999999"),
                (ENV_ACCESS_TOKEN, "token-123"),
                (ENV_REQUEST_TIMEOUT_MS, raw),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { .. }));
        }
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_ACCOUNT_ID, "999999999"),
            (ENV_ACCESS_TOKEN, "token-123"),
        ]))
        .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("token-123"));
    }
}
