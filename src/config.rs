//! Environment-based configuration
//!
//! All runtime knobs come from process environment variables. The auth
//! service URL falls back to the in-cluster default when unset; the remote
//! API settings have no default and their absence means "no live deployment
//! available".

use std::env;

/// Environment variable holding the gnosis-auth base URL
pub const GNOSIS_AUTH_URL_VAR: &str = "GNOSIS_AUTH_URL";

/// Default gnosis-auth base URL (in-cluster service address)
pub const DEFAULT_AUTH_URL: &str = "http://gnosis-auth:5000";

/// Environment variable holding the remote crawl API base URL
pub const GRUB_API_URL_VAR: &str = "GRUB_API_URL";

/// Environment variable holding the remote crawl API bearer token
pub const GRUB_AUTH_TOKEN_VAR: &str = "GRUB_AUTH_TOKEN";

/// Default service registry document, resolved relative to the working directory
pub const DEFAULT_SERVICES_PATH: &str = "gnosis_services.json";

/// Base URL of the gnosis-auth service, from `GNOSIS_AUTH_URL` or the default
pub fn auth_service_url() -> String {
    env::var(GNOSIS_AUTH_URL_VAR).unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Remote crawl API base URL, if a live deployment is configured
pub fn grub_api_url() -> Option<String> {
    non_empty(GRUB_API_URL_VAR)
}

/// Bearer token for the remote crawl API, if configured
pub fn grub_auth_token() -> Option<String> {
    non_empty(GRUB_AUTH_TOKEN_VAR)
}

/// Read an environment variable, treating empty values as unset
fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
