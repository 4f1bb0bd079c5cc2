//! Client configuration.
//!
//! This module provides:
//! - Client configuration with defaults
//! - Transport timeout pass-through

/// Default base URL for the BCX API.
pub const DEFAULT_BASE_URL: &str = "https://basecamp.com";
/// API version path segment, inserted between account id and endpoint path.
pub const API_VERSION: &str = "/api/v1";
/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "bcx-client/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/quanticsoul4772/bcx-client)"
);

/// Client configuration for the BCX API.
///
/// Timeouts are passed through to the underlying transport; the client
/// itself performs no retries and implements no timeout logic of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,
    /// User-Agent header value sent with every request.
    pub user_agent: String,
    /// Total request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the User-Agent header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set total request timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set connect timeout in milliseconds.
    #[must_use]
    pub const fn with_connect_timeout_ms(mut self, connect_timeout_ms: u64) -> Self {
        self.connect_timeout_ms = connect_timeout_ms;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}
