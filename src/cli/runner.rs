//! CLI runner - executes commands

use crate::auth::AuthClient;
use crate::cli::commands::{Cli, Commands};
use crate::config::DEFAULT_SERVICES_PATH;
use crate::error::Result;
use crate::registry::ServiceRegistry;
use std::path::PathBuf;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Services => self.services(),
            Commands::Resolve { service } => self.resolve(service),
            Commands::Info { service } => self.info(service),
            Commands::Validate { token } => self.validate(token).await,
            Commands::Refresh { token, agent_id } => self.refresh(token, agent_id).await,
        }
    }

    /// Load the registry from the configured path and environment
    fn load_registry(&self) -> Result<ServiceRegistry> {
        let path = self
            .cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SERVICES_PATH));
        ServiceRegistry::load(path, &self.cli.environment)
    }

    /// Build the auth client from the CLI override or the environment
    fn auth_client(&self) -> AuthClient {
        match &self.cli.auth_url {
            Some(url) => AuthClient::new(url.clone()),
            None => AuthClient::from_env(),
        }
    }

    fn services(&self) -> Result<()> {
        let registry = self.load_registry()?;
        let services = registry.list_services()?;
        println!("{}", serde_json::to_string_pretty(&services)?);
        Ok(())
    }

    fn resolve(&self, service: &str) -> Result<()> {
        let registry = self.load_registry()?;
        println!("{}", registry.get_service_url(service)?);
        Ok(())
    }

    fn info(&self, service: &str) -> Result<()> {
        let registry = self.load_registry()?;
        let info = registry.get_service_info(service)?;
        println!("{}", serde_json::to_string_pretty(&info)?);
        Ok(())
    }

    async fn validate(&self, token: &str) -> Result<()> {
        let payload = self.auth_client().validate_token(token).await?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    }

    async fn refresh(&self, token: &str, agent_id: &str) -> Result<()> {
        let payload = self
            .auth_client()
            .get_or_refresh_jwt(token, agent_id)
            .await?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    }
}
