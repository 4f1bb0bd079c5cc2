//! Integration test for the token refresh workflow.
//!
//! Walks the path a real caller takes when an access token goes stale:
//! detect the local expiry, exchange the refresh token at the Launchpad,
//! and swap the fresh strategy into the running client.

#![allow(clippy::unwrap_used)]

use bcx_client::oauth::OAuthFlow;
use bcx_client::{ApiError, Authentication, BcxClient, ClientConfig};
use chrono::{Duration, Utc};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn expired_token_refresh_and_retry() {
    let api_server = MockServer::start().await;
    let launchpad = MockServer::start().await;

    // The API only ever sees the refreshed token.
    Mock::given(method("GET"))
        .and(path("/999999999/api/v1/projects.json"))
        .and(header("Authorization", "Bearer refreshed-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&api_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/authorization/token"))
        .and(body_string_contains("type=refresh"))
        .and(body_string_contains("refresh_token=stored-refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "refreshed-token",
            "expires_in": 1_209_600,
            "refresh_token": "next-refresh-token"
        })))
        .expect(1)
        .mount(&launchpad)
        .await;

    let stale = Authentication::bearer_with_expiry(
        "stale-token",
        Utc::now() - Duration::minutes(5),
    );
    let config = ClientConfig::default().with_base_url(api_server.uri());
    let client = BcxClient::with_config("999999999", stale, config).unwrap();

    // The stale strategy fails locally, before any network traffic.
    let err = client.projects().all().await.unwrap_err();
    assert_eq!(err, ApiError::TokenInvalid);

    let flow = OAuthFlow::with_base_url(
        "client-id",
        "client-secret",
        "http://localhost:8080/callback",
        &launchpad.uri(),
    )
    .unwrap();
    let token = flow.refresh("stored-refresh-token").await.unwrap();
    assert_eq!(token.refresh_token.as_deref(), Some("next-refresh-token"));

    client.set_authentication(token.into_authentication());
    let projects = client.projects().all().await.unwrap();
    assert_eq!(projects, json!([]));
}
