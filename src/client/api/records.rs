//! Record lookup API trait

use async_trait::async_trait;

use crate::client::models::{AuditRecord, Credential, DateWindow, EnrollmentTask, TokenRecord};
use crate::client::pagination::PageRequest;
use crate::error::Result;

/// Record lookups for the SAS API.
///
/// Every method returns the backend's data as-is; filtering, ordering and
/// bounding belong to the retrieval layer.
#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// One page of every token in the organization
    async fn list_all_tokens(
        &self,
        credential: &Credential,
        page: &PageRequest,
    ) -> Result<Vec<TokenRecord>>;

    /// Tokens owned by one user, filtered server-side
    async fn list_user_tokens(
        &self,
        credential: &Credential,
        login: &str,
    ) -> Result<Vec<TokenRecord>>;

    /// One page of audit records for a user
    async fn list_audit(
        &self,
        credential: &Credential,
        login: &str,
        page: &PageRequest,
        window: &DateWindow,
    ) -> Result<Vec<AuditRecord>>;

    /// Pending enrollment tasks for the exact login given
    async fn list_enrollments(
        &self,
        credential: &Credential,
        login: &str,
    ) -> Result<Vec<EnrollmentTask>>;
}
