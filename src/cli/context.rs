//! Command execution context
//!
//! Loads and validates configuration and builds the backend client shared by
//! the retrieval commands. Authentication is left to each command so every
//! logical operation gets its own credential.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::SasClient;
use crate::client::models::Credential;
use crate::config::{BackendSettings, Config};
use crate::error::Result;
use crate::retrieval::{
    ApiCredentials, AuditFetcher, Authenticator, EnrollmentResolver, TokenFetcher, TokenStrategy,
};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with environment overrides applied
    pub config: Config,
    /// Validated backend settings
    pub settings: BackendSettings,
    /// Backend client (Arc-wrapped for concurrent variant queries)
    pub client: Arc<SasClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, validate backend settings and create the client.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or a backend setting is missing.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_env_overrides();
        let settings = config.validate_backend()?;
        debug!(
            "Using backend {} (org {})",
            settings.base_url, settings.org_name
        );

        let client = Arc::new(SasClient::new(&settings.base_url, &settings.org_name)?);

        Ok(Self {
            config,
            settings,
            client,
            format: opts.format,
        })
    }

    /// Obtain a fresh credential for one operation
    pub async fn authenticate(&self) -> Result<Credential> {
        Authenticator::new(self.client.clone(), ApiCredentials::from(&self.settings))
            .authenticate()
            .await
    }

    pub fn token_fetcher(&self, strategy: Option<TokenStrategy>) -> TokenFetcher<SasClient> {
        TokenFetcher::new(
            self.client.clone(),
            strategy.unwrap_or(self.config.token_strategy),
        )
        .with_page_size(self.config.page_size)
    }

    pub fn audit_fetcher(&self) -> AuditFetcher<SasClient> {
        AuditFetcher::new(self.client.clone())
    }

    pub fn enrollment_resolver(&self) -> EnrollmentResolver<SasClient> {
        EnrollmentResolver::new(self.client.clone(), self.config.fanout_concurrency)
    }
}
