//! Registry implementation
//!
//! Loads the environment-keyed JSON service document once and answers
//! lookups against the selected environment. Placeholder resolution happens
//! per lookup, so an environment variable changed between calls is
//! reflected immediately.

use super::types::{ServiceEntry, ServiceInfo, UrlSpec};
use crate::config::DEFAULT_SERVICES_PATH;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Full document shape: environment name -> service name -> record
type ServiceDocument = HashMap<String, HashMap<String, ServiceEntry>>;

/// Service registry for gnosis stack components
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    config_path: PathBuf,
    environment: String,
    services: HashMap<String, ServiceEntry>,
}

impl ServiceRegistry {
    /// Load the registry document and select one environment.
    ///
    /// Fails with `ConfigNotFound` when the file is missing, `ConfigInvalid`
    /// when the JSON is malformed, and `EnvironmentNotFound` when the
    /// requested environment key is absent.
    pub fn load(config_path: impl AsRef<Path>, environment: &str) -> Result<Self> {
        let path = config_path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.display().to_string())
            } else {
                Error::Io(e)
            }
        })?;

        let mut document: ServiceDocument =
            serde_json::from_str(&raw).map_err(|e| Error::config_invalid(e.to_string()))?;

        let services = document
            .remove(environment)
            .ok_or_else(|| Error::environment_not_found(environment))?;

        debug!(
            environment,
            services = services.len(),
            path = %path.display(),
            "loaded service registry"
        );

        Ok(Self {
            config_path: path.to_path_buf(),
            environment: environment.to_string(),
            services,
        })
    }

    /// Load `gnosis_services.json` from the working directory
    pub fn load_default(environment: &str) -> Result<Self> {
        Self::load(DEFAULT_SERVICES_PATH, environment)
    }

    /// Get a service URL by name, resolving `${VAR}` indirection.
    ///
    /// A resolution failure is fatal for this lookup only, not for the
    /// registry as a whole.
    pub fn get_service_url(&self, service_name: &str) -> Result<String> {
        let entry = self.entry(service_name)?;
        UrlSpec::parse(&entry.url).resolve(service_name)
    }

    /// Get the full service record with its URL resolved
    pub fn get_service_info(&self, service_name: &str) -> Result<ServiceInfo> {
        let entry = self.entry(service_name)?;
        let url = UrlSpec::parse(&entry.url).resolve(service_name)?;
        Ok(ServiceInfo {
            name: service_name.to_string(),
            url,
            description: entry.description.clone(),
        })
    }

    /// Map every service name to its resolved URL.
    ///
    /// Resolution is eager: any unresolved placeholder aborts the whole
    /// call.
    pub fn list_services(&self) -> Result<BTreeMap<String, String>> {
        self.services
            .keys()
            .map(|name| Ok((name.clone(), self.get_service_url(name)?)))
            .collect()
    }

    /// Sorted list of service names in the loaded environment
    pub fn service_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.services.keys().cloned().collect();
        names.sort();
        names
    }

    /// The environment this registry was loaded for
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Path of the document this registry was loaded from
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// AHP service URL
    pub fn ahp_url(&self) -> Result<String> {
        self.get_service_url("gnosis-ahp")
    }

    /// Crawl service URL
    pub fn crawl_url(&self) -> Result<String> {
        self.get_service_url("gnosis-crawl")
    }

    /// OCR service URL
    pub fn ocr_url(&self) -> Result<String> {
        self.get_service_url("gnosis-ocr")
    }

    fn entry(&self, service_name: &str) -> Result<&ServiceEntry> {
        self.services
            .get(service_name)
            .ok_or_else(|| Error::service_not_found(service_name, self.service_names()))
    }
}
