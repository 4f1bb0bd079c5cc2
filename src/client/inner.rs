//! Request engine shared by the client and its resource wrappers.
//!
//! One [`ClientInner`] instance backs a [`BcxClient`](super::BcxClient) and
//! every resource it hands out. It owns the account identity, the active
//! authentication strategy and the HTTP transport, and performs all request
//! construction and error classification.

use std::sync::{PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;

use super::config::{ClientConfig, API_VERSION};
use crate::auth::Authentication;
use crate::error::ApiError;

/// Body payload for a single request.
pub(crate) enum RequestBody<'a> {
    /// Structured value, serialized as JSON.
    Json(&'a Value),
    /// Raw bytes sent verbatim; the caller supplies content headers.
    Raw(Vec<u8>),
}

/// Transient options describing one request.
pub(crate) struct RequestOptions<'a> {
    /// Query parameters, URL-encoded by the transport.
    pub query: &'a [(&'a str, &'a str)],
    /// Optional request body.
    pub body: Option<RequestBody<'a>>,
    /// Per-call headers, overriding defaults and auth headers on collision.
    pub headers: &'a [(&'a str, &'a str)],
}

impl RequestOptions<'_> {
    pub(crate) const fn none() -> Self {
        RequestOptions {
            query: &[],
            body: None,
            headers: &[],
        }
    }
}

/// Shared request engine.
///
/// Holds no per-request state; every call is independent. The
/// authentication strategy sits behind a lock so a refreshed token can be
/// swapped in without reconstructing the client or its resources.
pub(crate) struct ClientInner {
    account_id: String,
    authentication: RwLock<Authentication>,
    http: reqwest::Client,
    config: ClientConfig,
}

impl ClientInner {
    pub(crate) fn new(
        account_id: String,
        authentication: Authentication,
        http: reqwest::Client,
        config: ClientConfig,
    ) -> Self {
        Self {
            account_id,
            authentication: RwLock::new(authentication),
            http,
            config,
        }
    }

    pub(crate) fn account_id(&self) -> &str {
        &self.account_id
    }

    pub(crate) const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the active authentication strategy.
    pub(crate) fn set_authentication(&self, authentication: Authentication) {
        *self
            .authentication
            .write()
            .unwrap_or_else(PoisonError::into_inner) = authentication;
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            path,
            RequestOptions {
                query,
                body: None,
                headers: &[],
            },
        )
        .await
    }

    pub(crate) async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            path,
            RequestOptions {
                query: &[],
                body: Some(RequestBody::Json(body)),
                headers: &[],
            },
        )
        .await
    }

    pub(crate) async fn post_raw(
        &self,
        path: &str,
        body: Vec<u8>,
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            path,
            RequestOptions {
                query: &[],
                body: Some(RequestBody::Raw(body)),
                headers,
            },
        )
        .await
    }

    pub(crate) async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            path,
            RequestOptions {
                query: &[],
                body: Some(RequestBody::Json(body)),
                headers: &[],
            },
        )
        .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::DELETE, path, RequestOptions::none())
            .await
            .map(|_| ())
    }

    /// Issue one request and classify the outcome.
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions<'_>,
    ) -> Result<Value, ApiError> {
        // Local pre-flight check; an invalid strategy never reaches the wire.
        let auth_header = {
            let auth = self
                .authentication
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if !auth.is_valid() {
                return Err(ApiError::TokenInvalid);
            }
            auth.header_value()
        };

        let url = format!(
            "{}/{}{}{}",
            self.config.base_url, self.account_id, API_VERSION, path
        );
        let headers = self.build_headers(&auth_header, options.headers)?;

        tracing::debug!(
            method = %method,
            url = %url,
            query_params = options.query.len(),
            "BCX API request"
        );

        let is_delete = method == Method::DELETE;
        let mut request = self.http.request(method, &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(options.query);
        }
        match options.body {
            Some(RequestBody::Json(value)) => request = request.json(value),
            Some(RequestBody::Raw(bytes)) => request = request.body(bytes),
            None => {}
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!(url = %url, timeout_ms = self.config.timeout_ms, "BCX API request timed out");
                ApiError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                }
            } else {
                tracing::error!(url = %url, error = %e, "BCX API request failed to send");
                ApiError::Network {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "BCX API response");

        if status.as_u16() == 401 {
            // Body read is best-effort diagnostics only.
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = 401, body = %body, "BCX API rejected authentication");
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
            tracing::error!(status = status.as_u16(), body = %body, "BCX API request failed");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message,
                body,
            });
        }

        // DELETE responses and 204 No Content carry no parseable body.
        if status.as_u16() == 204 || is_delete {
            return Ok(Value::Null);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::UnexpectedResponse {
                message: format!("Failed to parse response body: {e}"),
            })
    }

    /// Assemble the header map: defaults, then the authentication header,
    /// then per-call headers. Later layers replace earlier ones on key
    /// collision.
    fn build_headers(
        &self,
        auth_header: &str,
        custom: &[(&str, &str)],
    ) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            header_value(&self.config.user_agent)?,
        );
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(reqwest::header::AUTHORIZATION, header_value(auth_header)?);

        for (name, value) in custom {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ApiError::InvalidRequest {
                    message: format!("Invalid header name {name:?}: {e}"),
                }
            })?;
            headers.insert(name, header_value(value)?);
        }

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|e| ApiError::InvalidRequest {
        message: format!("Invalid header value: {e}"),
    })
}
