//! Auth client implementation
//!
//! Two thin wrappers over the gnosis-auth HTTP API. Failures are logged
//! before the error is returned so operators get a record even when the
//! caller discards the detail. No retries, no token caching.

use crate::config;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::error;

/// Timeout for auth service round-trips
const AUTH_TIMEOUT: Duration = Duration::from_secs(10);

static SHARED: Lazy<AuthClient> = Lazy::new(AuthClient::from_env);

/// Body of the refresh request
#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    agent_id: &'a str,
}

/// Client for communicating with the gnosis-auth service
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    /// Create a client for the given base URL.
    ///
    /// Construction performs no network I/O. A trailing slash on the base
    /// URL is trimmed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(AUTH_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self::with_client(base_url, client)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Create a client from `GNOSIS_AUTH_URL`, falling back to the default
    pub fn from_env() -> Self {
        Self::new(config::auth_service_url())
    }

    /// Process-wide shared instance, constructed from the environment on
    /// first access.
    ///
    /// Prefer constructing a client explicitly and passing it to consumers;
    /// this accessor exists for call sites that want a single ambient
    /// client for the process lifetime.
    pub fn shared() -> &'static AuthClient {
        &SHARED
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get or refresh a JWT from the auth service.
    ///
    /// Sends the bearer token in the `Authorization` header and the agent
    /// id in the JSON body. On HTTP 200 the parsed JSON body is returned
    /// unchanged; the payload schema is opaque to this client.
    pub async fn get_or_refresh_jwt(&self, bearer_token: &str, agent_id: &str) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}/api/auth/refresh", self.base_url))
            .bearer_auth(bearer_token)
            .json(&RefreshRequest { agent_id })
            .send()
            .await
            .map_err(|e| {
                error!("Error communicating with auth service: {e}");
                Error::AuthServiceUnreachable(e)
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            return parse_payload(response).await;
        }

        let body = response.text().await.unwrap_or_default();
        error!("JWT refresh failed: {status} - {body}");
        Err(Error::JwtRefreshFailed { status, body })
    }

    /// Validate a token with the auth service.
    ///
    /// Same status contract as the refresh call, without a request body.
    pub async fn validate_token(&self, token: &str) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}/api/auth/validate", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                error!("Error validating token: {e}");
                Error::AuthServiceUnreachable(e)
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            return parse_payload(response).await;
        }

        error!("Token validation failed: {status}");
        Err(Error::TokenValidationFailed { status })
    }
}

/// Parse a 200 response body as JSON, surfacing a distinct error when the
/// body is not JSON at all. The payload contents are never inspected.
async fn parse_payload(response: reqwest::Response) -> Result<Value> {
    let body = response
        .text()
        .await
        .map_err(Error::AuthServiceUnreachable)?;
    serde_json::from_str(&body).map_err(|e| Error::unexpected_shape(e.to_string()))
}
