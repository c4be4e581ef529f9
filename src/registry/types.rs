//! Service registry types
//!
//! A service record maps a logical name to a URL that is either a literal
//! or a whole-string `${VAR}` environment placeholder.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::LazyLock;

/// Regex for a whole-string environment placeholder: `${NAME}`
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{([A-Za-z_][A-Za-z0-9_]*)\}$").unwrap());

/// One service record as stored in the registry document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Raw URL value; may be a `${VAR}` placeholder
    pub url: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A service record with its URL resolved
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    /// Logical service name
    pub name: String,
    /// Resolved URL (never a placeholder)
    pub url: String,
    /// Optional human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Recognized forms of a configured service URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSpec {
    /// A literal URL, returned unchanged
    Literal(String),
    /// An environment indirection: the named variable holds the URL
    EnvVar(String),
}

impl UrlSpec {
    /// Classify a raw URL value. Only a whole-string `${NAME}` marker counts
    /// as an indirection; anything else is a literal.
    pub fn parse(raw: &str) -> Self {
        match PLACEHOLDER_REGEX.captures(raw) {
            Some(cap) => Self::EnvVar(cap[1].to_string()),
            None => Self::Literal(raw.to_string()),
        }
    }

    /// Resolve against the process environment. An unset or empty variable
    /// fails with `EnvVarMissing`; `service` names the owning service for
    /// error reporting.
    pub fn resolve(&self, service: &str) -> Result<String> {
        match self {
            Self::Literal(url) => Ok(url.clone()),
            Self::EnvVar(name) => match env::var(name) {
                Ok(value) if !value.is_empty() => Ok(value),
                _ => Err(Error::env_var_missing(name.clone(), service)),
            },
        }
    }
}
