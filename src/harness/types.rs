//! Harness configuration types

use crate::config;

/// Remote API configuration derived from environment variables at test
/// setup time
#[derive(Debug, Clone)]
pub struct TestApiConfig {
    /// Base URL of the deployment under test
    pub url: String,
    /// Bearer token; `None` when the deployment runs with auth disabled
    pub token: Option<String>,
    /// Whether authenticated behavior is expected from the deployment
    pub auth_enabled: bool,
}

impl TestApiConfig {
    /// Build a config from explicit values. Used by mock-backed tests.
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        let auth_enabled = token.is_some();
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            token,
            auth_enabled,
        }
    }

    /// Read `GRUB_API_URL` and `GRUB_AUTH_TOKEN` from the environment.
    ///
    /// Returns `None` when the URL is unset: no live deployment is
    /// available and the caller should skip, not fail.
    pub fn from_env() -> Option<Self> {
        let url = config::grub_api_url()?;
        Some(Self::new(url, config::grub_auth_token()))
    }
}

/// How to attach credentials to an outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BearerAuth<'a> {
    /// No `Authorization` header
    #[default]
    None,
    /// `Authorization: Bearer <token>`
    Bearer(&'a str),
    /// Raw token value sent without the `Bearer ` prefix, for exercising
    /// rejection paths
    Raw(&'a str),
}
