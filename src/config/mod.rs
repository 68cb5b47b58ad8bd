//! Configuration management for sasop

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::pagination::MAX_PAGE_SIZE;
use crate::error::{ConfigError, Result};
use crate::retrieval::TokenStrategy;

/// Default number of records shown per command
const DEFAULT_LIMIT: usize = 10;

/// Default number of concurrent enrollment variant queries
const DEFAULT_FANOUT_CONCURRENCY: usize = 2;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL (e.g. `https://sas.example.com`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Pre-shared client identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    /// Pre-shared client signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Organization the records belong to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,

    /// Default number of records per command
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// How token records are looked up
    #[serde(default)]
    pub token_strategy: TokenStrategy,

    /// Records per backend page when walking all tokens
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum enrollment variant queries in flight
    #[serde(default = "default_fanout_concurrency")]
    pub fanout_concurrency: usize,

    /// Remote log host settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

/// SSH settings for remote log retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Host holding the operational logs
    pub host: String,

    /// Remote account
    pub user: String,

    /// SSH port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Private key used to authenticate
    pub key_path: PathBuf,

    /// Known hosts file the host key is verified against
    pub known_hosts_path: PathBuf,

    /// Remote command; the quoted login is appended as its only argument
    pub command: String,

    /// Upper bound on the whole remote run
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// SSH client executable
    #[serde(default = "default_ssh_program")]
    pub ssh_program: String,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

fn default_fanout_concurrency() -> usize {
    DEFAULT_FANOUT_CONCURRENCY
}

fn default_port() -> u16 {
    22
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_ssh_program() -> String {
    "ssh".to_string()
}

/// Backend settings after validation
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub guid: String,
    pub signature: String,
    pub org_name: String,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".sasop").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an override path or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an override path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds the signature
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply `SASOP_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment in production)
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SASOP_BASE_URL") {
            self.base_url = Some(url);
        }
        if let Some(guid) = lookup("SASOP_GUID") {
            self.guid = Some(guid);
        }
        if let Some(signature) = lookup("SASOP_SIGNATURE") {
            self.signature = Some(signature);
        }
        if let Some(org) = lookup("SASOP_ORG_NAME") {
            self.org_name = Some(org);
        }
        if let Some(limit) = lookup("SASOP_LIMIT").and_then(|v| v.parse().ok()) {
            self.limit = limit;
        }
        self
    }

    /// Validate that every backend setting is present
    pub fn validate_backend(&self) -> Result<BackendSettings> {
        fn required(value: &Option<String>, name: &'static str) -> Result<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| ConfigError::MissingBackend(name).into())
        }

        Ok(BackendSettings {
            base_url: required(&self.base_url, "base_url")?,
            guid: required(&self.guid, "guid")?,
            signature: required(&self.signature, "signature")?,
            org_name: required(&self.org_name, "org_name")?,
        })
    }

    /// Get the remote settings, returning an error if not configured
    pub fn require_remote(&self) -> Result<&RemoteConfig> {
        self.remote
            .as_ref()
            .ok_or_else(|| ConfigError::MissingRemote.into())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            guid: None,
            signature: None,
            org_name: None,
            limit: default_limit(),
            token_strategy: TokenStrategy::default(),
            page_size: default_page_size(),
            fanout_concurrency: default_fanout_concurrency(),
            remote: None,
        }
    }
}
