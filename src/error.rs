//! Error types for gnosis-relay
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for gnosis-relay
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Service Registry Errors
    // ============================================================================
    /// Registry document missing at the given path
    #[error("Service config not found at {path}")]
    ConfigNotFound { path: String },

    /// Registry document is not valid JSON
    #[error("Invalid JSON in service config: {message}")]
    ConfigInvalid { message: String },

    /// Requested environment key absent from the document
    #[error("Environment '{environment}' not found in service config")]
    EnvironmentNotFound { environment: String },

    /// Unknown service name; carries the set of known names
    #[error("Service '{service}' not found. Available: {available:?}")]
    ServiceNotFound {
        service: String,
        available: Vec<String>,
    },

    /// A `${VAR}` indirection whose variable is unset or empty
    #[error("Environment variable {variable} not set for service {service}")]
    EnvVarMissing { variable: String, service: String },

    // ============================================================================
    // Auth Client Errors
    // ============================================================================
    /// Refresh endpoint answered with a non-200 status
    #[error("JWT refresh failed: {status}")]
    JwtRefreshFailed { status: u16, body: String },

    /// Validate endpoint answered with a non-200 status
    #[error("Token validation failed: {status}")]
    TokenValidationFailed { status: u16 },

    /// Transport-level failure reaching the auth service (DNS, refused,
    /// timeout)
    #[error("Auth service communication error: {0}")]
    AuthServiceUnreachable(#[source] reqwest::Error),

    /// A 200 response whose body is not JSON
    #[error("Unexpected response shape: {message}")]
    UnexpectedResponseShape { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Any other HTTP request failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected HTTP status with its body
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // I/O and Parsing Errors
    // ============================================================================
    /// Filesystem error other than a missing config
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure outside the registry document
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Free-form error
    #[error("{0}")]
    Other(String),

    /// Interop with anyhow-based callers
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config-not-found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a config-invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Create an environment-not-found error
    pub fn environment_not_found(environment: impl Into<String>) -> Self {
        Self::EnvironmentNotFound {
            environment: environment.into(),
        }
    }

    /// Create a service-not-found error reporting the available names
    pub fn service_not_found(service: impl Into<String>, available: Vec<String>) -> Self {
        Self::ServiceNotFound {
            service: service.into(),
            available,
        }
    }

    /// Create an env-var-missing error
    pub fn env_var_missing(variable: impl Into<String>, service: impl Into<String>) -> Self {
        Self::EnvVarMissing {
            variable: variable.into(),
            service: service.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an unexpected-response-shape error
    pub fn unexpected_shape(message: impl Into<String>) -> Self {
        Self::UnexpectedResponseShape {
            message: message.into(),
        }
    }
}

/// Result type alias for gnosis-relay
pub type Result<T> = std::result::Result<T, Error>;
