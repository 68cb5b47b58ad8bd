//! Error types for the sasop CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sasop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Authentication failed: {0}")]
    Auth(ApiError),

    #[error("{}", format_variant_errors(.0))]
    PartialFanout(Vec<VariantError>),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Backend API errors.
///
/// A response can fail at three levels: the connection, the HTTP status, or
/// the `Result` code embedded in an otherwise successful body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Backend rejected the request: {0}")]
    Logical(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// A single login variant whose enrollment query failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantError {
    /// The casing variant that was queried
    pub variant: String,
    /// Human-readable failure description
    pub message: String,
}

fn format_variant_errors(errors: &[VariantError]) -> String {
    let details: Vec<String> = errors
        .iter()
        .map(|e| format!("{}: {}", e.variant, e.message))
        .collect();
    format!("Enrollment lookup failed for {}", details.join("; "))
}

/// Remote log retrieval errors
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Private key not found: {}", .0.display())]
    MissingKey(PathBuf),

    #[error("Known hosts file not found: {}", .0.display())]
    MissingKnownHosts(PathBuf),

    #[error("Login cannot be passed to the remote command: {0}")]
    InvalidIdentity(String),

    #[error("Failed to start ssh: {0}")]
    Spawn(String),

    #[error("Remote command timed out after {0}s")]
    Timeout(u64),

    #[error("Remote command failed (exit {code}): {message}")]
    Exit { code: i32, message: String },

    #[error("Remote command error: {0}")]
    Unexpected(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `sasop init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Backend setting `{0}` is not configured. Run `sasop init` to set it up.")]
    MissingBackend(&'static str),

    #[error("Remote log retrieval is not configured. Add a `remote` section to the config file.")]
    MissingRemote,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
