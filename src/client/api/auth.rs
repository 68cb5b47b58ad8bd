//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::Credential;
use crate::error::Result;

/// Authentication operations for the SAS API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange the pre-shared GUID and signature for a credential
    async fn login(&self, guid: &str, signature: &str) -> Result<Credential>;
}
