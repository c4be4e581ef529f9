//! Remote API request assembly

use super::types::{BearerAuth, TestApiConfig};
use crate::error::Result;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::{json, Value};
use std::time::Duration;

/// Timeout for remote API round-trips
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the crawl API deployment under test
#[derive(Debug)]
pub struct RemoteApi {
    config: TestApiConfig,
    client: Client,
}

impl RemoteApi {
    /// Create a client for the configured deployment
    pub fn new(config: TestApiConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self { config, client }
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &TestApiConfig {
        &self.config
    }

    /// Bearer auth from the configured token, when present
    pub fn configured_auth(&self) -> BearerAuth<'_> {
        match self.config.token.as_deref() {
            Some(token) => BearerAuth::Bearer(token),
            None => BearerAuth::None,
        }
    }

    /// POST `/api/markdown` with `{"url": ...}`
    pub async fn markdown(&self, target_url: &str, auth: BearerAuth<'_>) -> Result<Response> {
        let req = self
            .client
            .post(format!("{}/api/markdown", self.config.url))
            .json(&json!({ "url": target_url }));
        Ok(apply_auth(req, auth).send().await?)
    }

    /// POST `/api/raw` with `{"url": ..., "javascript_enabled": ...}`
    pub async fn raw(
        &self,
        target_url: &str,
        javascript_enabled: bool,
        auth: BearerAuth<'_>,
    ) -> Result<Response> {
        let req = self
            .client
            .post(format!("{}/api/raw", self.config.url))
            .json(&json!({
                "url": target_url,
                "javascript_enabled": javascript_enabled
            }));
        Ok(apply_auth(req, auth).send().await?)
    }
}

/// Attach credentials to a request builder
fn apply_auth(req: RequestBuilder, auth: BearerAuth<'_>) -> RequestBuilder {
    match auth {
        BearerAuth::None => req,
        BearerAuth::Bearer(token) => req.bearer_auth(token),
        BearerAuth::Raw(token) => req.header("Authorization", token),
    }
}

/// True when the JSON value has any of the given top-level keys
pub fn has_any_key(value: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|k| value.get(k).is_some())
}
