//! Credential acquisition

use std::sync::Arc;

use log::{error, info};

use crate::client::AuthApi;
use crate::client::models::Credential;
use crate::config::BackendSettings;
use crate::error::{Error, Result};

/// Pre-shared identifier and signature for `/sdk/login`
#[derive(Clone)]
pub struct ApiCredentials {
    pub guid: String,
    pub signature: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("guid", &self.guid)
            .field("signature", &"***")
            .finish()
    }
}

impl From<&BackendSettings> for ApiCredentials {
    fn from(settings: &BackendSettings) -> Self {
        Self {
            guid: settings.guid.clone(),
            signature: settings.signature.clone(),
        }
    }
}

/// Obtains a fresh credential for every logical operation.
pub struct Authenticator<C> {
    client: Arc<C>,
    credentials: ApiCredentials,
}

impl<C: AuthApi> Authenticator<C> {
    pub fn new(client: Arc<C>, credentials: ApiCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Log in once. Never retries.
    ///
    /// Transport errors, non-200 statuses and non-zero `Result` codes all come
    /// back as [`Error::Auth`]; callers must not issue dependent requests then.
    pub async fn authenticate(&self) -> Result<Credential> {
        match self
            .client
            .login(&self.credentials.guid, &self.credentials.signature)
            .await
        {
            Ok(credential) => {
                info!("Authenticated against SAS");
                Ok(credential)
            }
            Err(Error::Api(api_err)) => {
                error!("Authentication failed: {}", api_err);
                Err(Error::Auth(api_err))
            }
            Err(other) => {
                error!("Authentication failed: {}", other);
                Err(other)
            }
        }
    }
}
