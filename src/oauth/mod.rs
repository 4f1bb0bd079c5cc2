//! OAuth 2.0 authorization flow for the BCX API.
//!
//! This module provides:
//! - Authorization URL construction for the web-server flow
//! - Authorization-code exchange and refresh-token exchange
//! - Account information lookup for a bearer token
//!
//! The flow talks to the 37signals Launchpad, not the BCX API itself, and
//! holds no state beyond the application credentials. Its output is raw
//! token data; [`TokenResponse::into_authentication`] turns it into a
//! strategy ready for [`BcxClient`](crate::BcxClient). When and where to
//! persist tokens is the caller's concern.
//!
//! # Example
//!
//! ```no_run
//! use bcx_client::oauth::OAuthFlow;
//!
//! # async fn run() -> Result<(), bcx_client::ApiError> {
//! let flow = OAuthFlow::new("client-id", "client-secret", "http://localhost:8080/callback")?;
//! println!("Authorize at: {}", flow.authorization_url());
//!
//! let token = flow.exchange_code("code-from-callback").await?;
//! let auth = token.into_authentication();
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::auth::Authentication;
use crate::client::{DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};
use crate::config::SecretString;
use crate::error::ApiError;

/// Base URL of the 37signals Launchpad authorization server.
pub const LAUNCHPAD_BASE_URL: &str = "https://launchpad.37signals.com";

/// OAuth 2.0 web-server flow against the Launchpad.
pub struct OAuthFlow {
    client_id: String,
    client_secret: SecretString,
    redirect_uri: String,
    base: Url,
    http: reqwest::Client,
}

impl OAuthFlow {
    /// Create a flow for a registered application.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP transport cannot be built.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::with_base_url(client_id, client_secret, redirect_uri, LAUNCHPAD_BASE_URL)
    }

    /// Create a flow against a non-default authorization server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `base_url` is not a valid
    /// URL, or [`ApiError::Network`] if the HTTP transport cannot be built.
    pub fn with_base_url(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidRequest {
            message: format!("Invalid authorization server URL: {e}"),
        })?;
        let http = reqwest::Client::builder()
            .timeout(StdDuration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()
            .map_err(|e| ApiError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret),
            redirect_uri: redirect_uri.into(),
            base,
            http,
        })
    }

    /// The URL to direct the user to for authorization.
    ///
    /// After approval, the user is redirected to `redirect_uri` with a
    /// `code` query parameter to pass to [`exchange_code`](Self::exchange_code).
    #[must_use]
    pub fn authorization_url(&self) -> String {
        let mut url = self.base.clone();
        url.set_path("/authorization/new");
        url.query_pairs_mut()
            .append_pair("type", "web_server")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri);
        url.to_string()
    }

    /// Exchange an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the Launchpad rejects the exchange or the
    /// response cannot be decoded.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ApiError> {
        let params = [
            ("type", "web_server"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("code", code),
        ];
        self.token_request(&params).await
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the Launchpad rejects the exchange or the
    /// response cannot be decoded.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, ApiError> {
        let params = [
            ("type", "refresh"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose()),
            ("refresh_token", refresh_token),
        ];
        self.token_request(&params).await
    }

    /// Get identity and account information for a bearer token.
    ///
    /// The response lists every 37signals account the user can reach; BCX
    /// accounts carry `"product": "bcx"` and their numeric `id` is the
    /// account identifier for [`BcxClient`](crate::BcxClient).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the token is rejected or the response cannot
    /// be decoded.
    pub async fn account_info(&self, access_token: &str) -> Result<Value, ApiError> {
        let mut url = self.base.clone();
        url.set_path("/authorization.json");

        tracing::debug!(url = %url, "Launchpad account info request");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, DEFAULT_USER_AGENT)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        let response = classify_status(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::UnexpectedResponse {
                message: format!("Failed to parse account info response: {e}"),
            })
    }

    async fn token_request(&self, params: &[(&str, &str)]) -> Result<TokenResponse, ApiError> {
        let mut url = self.base.clone();
        url.set_path("/authorization/token");

        tracing::debug!(url = %url, grant = params[0].1, "Launchpad token request");

        let response = self
            .http
            .post(url)
            .header(reqwest::header::USER_AGENT, DEFAULT_USER_AGENT)
            .form(params)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        let response = classify_status(response).await?;
        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::UnexpectedResponse {
                message: format!("Failed to parse token response: {e}"),
            })
    }
}

impl fmt::Debug for OAuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthFlow")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret)
            .field("redirect_uri", &self.redirect_uri)
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

/// Map non-success Launchpad responses onto the error taxonomy.
async fn classify_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.as_u16() == 401 {
        return Err(ApiError::AuthenticationFailed {
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        let message = status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "Launchpad request failed");
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
            message,
            body,
        });
    }
    Ok(response)
}

/// Raw token data returned by the Launchpad.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Opaque access token.
    pub access_token: String,
    /// Token lifetime in seconds from the moment of issue.
    pub expires_in: i64,
    /// Refresh token for obtaining the next access token, when granted.
    pub refresh_token: Option<String>,
}

impl TokenResponse {
    /// Turn this token into an authentication strategy expiring
    /// `expires_in` seconds from now.
    #[must_use]
    pub fn into_authentication(self) -> Authentication {
        let expires_at = Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
        match expires_at {
            Some(expires_at) => Authentication::bearer_with_expiry(self.access_token, expires_at),
            None => Authentication::bearer(self.access_token),
        }
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<REDACTED>")
            .field("expires_in", &self.expires_in)
            .field(
                "refresh_token",
                &self.refresh_token.as_deref().map(|_| "<REDACTED>"),
            )
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_flow(server: &MockServer) -> OAuthFlow {
        OAuthFlow::with_base_url(
            "test-client-id",
            "test-client-secret",
            "http://localhost:8080/callback",
            &server.uri(),
        )
        .unwrap()
    }

    fn token_body() -> Value {
        json!({
            "access_token": "fresh-access-token",
            "expires_in": 1_209_600,
            "refresh_token": "next-refresh-token"
        })
    }

    #[test]
    fn test_authorization_url_encodes_parameters() {
        let flow = OAuthFlow::new(
            "my client",
            "secret",
            "http://localhost:8080/callback",
        )
        .unwrap();

        let url = flow.authorization_url();
        assert!(url.starts_with("https://launchpad.37signals.com/authorization/new?"));
        assert!(url.contains("type=web_server"));
        assert!(url.contains("client_id=my+client"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcallback"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = OAuthFlow::with_base_url("id", "secret", "uri", "not a url");
        assert!(matches!(
            result.unwrap_err(),
            ApiError::InvalidRequest { .. }
        ));
    }

    #[tokio::test]
    async fn test_exchange_code_posts_form_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authorization/token"))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("type=web_server"))
            .and(body_string_contains("client_id=test-client-id"))
            .and(body_string_contains("client_secret=test-client-secret"))
            .and(body_string_contains("code=auth-code-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let flow = mock_flow(&server);
        let token = flow.exchange_code("auth-code-123").await.unwrap();

        assert_eq!(token.access_token, "fresh-access-token");
        assert_eq!(token.expires_in, 1_209_600);
        assert_eq!(token.refresh_token.as_deref(), Some("next-refresh-token"));
    }

    #[tokio::test]
    async fn test_refresh_posts_refresh_grant() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authorization/token"))
            .and(body_string_contains("type=refresh"))
            .and(body_string_contains("refresh_token=old-refresh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let flow = mock_flow(&server);
        let token = flow.refresh("old-refresh-token").await.unwrap();
        assert_eq!(token.access_token, "fresh-access-token");
    }

    #[tokio::test]
    async fn test_exchange_failure_maps_to_request_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authorization/token"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_grant"}"#),
            )
            .mount(&server)
            .await;

        let flow = mock_flow(&server);
        let err = flow.exchange_code("bad-code").await.unwrap_err();

        match err {
            ApiError::RequestFailed { status, body, .. } => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"error":"invalid_grant"}"#);
            }
            e => panic!("Wrong error type: {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_account_info_sends_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/authorization.json"))
            .and(header("Authorization", "Bearer access-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identity": {"id": 1, "email_address": "user@example.com"},
                "accounts": [{"product": "bcx", "id": 999_999_999}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let flow = mock_flow(&server);
        let info = flow.account_info("access-token").await.unwrap();
        assert_eq!(info["accounts"][0]["id"], 999_999_999);
    }

    #[tokio::test]
    async fn test_account_info_401_maps_to_authentication_failed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/authorization.json"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let flow = mock_flow(&server);
        let err = flow.account_info("revoked-token").await.unwrap_err();
        assert_eq!(err, ApiError::AuthenticationFailed { status: 401 });
    }

    #[test]
    fn test_token_into_authentication_sets_future_expiry() {
        let token = TokenResponse {
            access_token: "abc".to_string(),
            expires_in: 1_209_600,
            refresh_token: None,
        };

        let auth = token.into_authentication();
        assert!(auth.is_valid());
        let expires_at = auth.expires_at().unwrap();
        assert!(expires_at > Utc::now() + Duration::days(13));
        assert!(expires_at < Utc::now() + Duration::days(15));
    }

    #[test]
    fn test_expired_token_into_authentication_is_invalid() {
        let token = TokenResponse {
            access_token: "abc".to_string(),
            expires_in: -60,
            refresh_token: None,
        };

        assert!(!token.into_authentication().is_valid());
    }

    #[test]
    fn test_token_response_debug_redacts() {
        let token = TokenResponse {
            access_token: "secret-access".to_string(),
            expires_in: 60,
            refresh_token: Some("secret-refresh".to_string()),
        };

        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("<REDACTED>"));
    }

    #[test]
    fn test_oauth_flow_debug_redacts_secret() {
        let flow = OAuthFlow::new("id", "very-secret", "uri").unwrap();
        let debug = format!("{flow:?}");
        assert!(debug.contains("OAuthFlow"));
        assert!(!debug.contains("very-secret"));
    }
}
