//! Tests for the auth module

use super::*;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_refresh_sends_bearer_and_agent_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(header("Authorization", "Bearer hmac-token-abc"))
        .and(body_json(json!({"agent_id": "agent-7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jwt": "eyJhbGciOi...",
            "user": {"id": 42, "name": "kord"}
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri());
    let payload = client
        .get_or_refresh_jwt("hmac-token-abc", "agent-7")
        .await
        .unwrap();

    // The body comes back unchanged; the schema is opaque to the client.
    assert_eq!(payload["jwt"], "eyJhbGciOi...");
    assert_eq!(payload["user"]["id"], 42);
}

#[tokio::test]
async fn test_refresh_non_200_fails_with_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(ResponseTemplate::new(403).set_body_string("token revoked"))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri());
    let err = client
        .get_or_refresh_jwt("revoked-token", "agent-7")
        .await
        .unwrap_err();

    match err {
        Error::JwtRefreshFailed { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "token revoked");
        }
        other => panic!("expected JwtRefreshFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/validate"))
        .and(header("Authorization", "Bearer some-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": true,
            "user": {"id": 42}
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri());
    let payload = client.validate_token("some-jwt").await.unwrap();
    assert_eq!(payload["valid"], true);
}

#[tokio::test]
async fn test_validate_non_200_fails_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/validate"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri());
    let err = client.validate_token("bad-jwt").await.unwrap_err();
    assert!(matches!(err, Error::TokenValidationFailed { status: 401 }));
}

#[tokio::test]
async fn test_validate_timeout_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/validate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"valid": true}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = AuthClient::with_client(mock_server.uri(), http);

    let err = client.validate_token("some-jwt").await.unwrap_err();
    assert!(matches!(err, Error::AuthServiceUnreachable(_)));
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    // Nothing listens on this port.
    let client = AuthClient::new("http://127.0.0.1:1");
    let err = client
        .get_or_refresh_jwt("token", "agent-7")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AuthServiceUnreachable(_)));
}

#[tokio::test]
async fn test_non_json_200_body_is_unexpected_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri());
    let err = client.validate_token("some-jwt").await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponseShape { .. }));
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = AuthClient::new("http://gnosis-auth:5000/");
    assert_eq!(client.base_url(), "http://gnosis-auth:5000");
}

#[test]
fn test_shared_returns_same_instance() {
    let a = AuthClient::shared();
    let b = AuthClient::shared();
    assert!(std::ptr::eq(a, b));
}
