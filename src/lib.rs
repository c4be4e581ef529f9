//! # gnosis-relay
//!
//! Authentication relay and service discovery client for the gnosis
//! crawling stack.
//!
//! ## Features
//!
//! - **Auth relay**: forward bearer tokens to gnosis-auth and get JWTs
//!   back (`/api/auth/refresh`, `/api/auth/validate`)
//! - **Service registry**: environment-scoped service URL lookup from a
//!   JSON document, with `${VAR}` environment indirection
//! - **Test harness**: request assembly and skip-aware configuration for
//!   exercising a live crawl API deployment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gnosis_relay::{AuthClient, Result, ServiceRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let registry = ServiceRegistry::load_default("development")?;
//!     let auth = AuthClient::new(registry.get_service_url("gnosis-auth")?);
//!
//!     let payload = auth.get_or_refresh_jwt("hmac-token", "agent-1").await?;
//!     println!("{payload}");
//!
//!     Ok(())
//! }
//! ```
//!
//! There is no retry, token caching, or connection pooling in here: every
//! call is one HTTP round-trip whose outcome goes straight back to the
//! caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Environment-based configuration
pub mod config;

/// Service registry and URL resolution
pub mod registry;

/// Auth service client
pub mod auth;

/// Integration-test harness for the remote crawl API
pub mod harness;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::AuthClient;
pub use error::{Error, Result};
pub use harness::{BearerAuth, RemoteApi, TestApiConfig};
pub use registry::{ServiceEntry, ServiceInfo, ServiceRegistry, UrlSpec};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
