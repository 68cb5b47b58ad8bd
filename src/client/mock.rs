//! Mock SAS API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing the
//! retrieval layer without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, RecordsApi};
use super::models::{AuditRecord, Credential, DateWindow, EnrollmentTask, TokenRecord};
use super::pagination::PageRequest;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockSasClient::new()
///     .with_token_pages(vec![vec![token(1, "ivanova")]])
///     .await;
///
/// let page = mock.list_all_tokens(&credential, &PageRequest::first()).await?;
/// assert_eq!(page.len(), 1);
/// ```
#[derive(Default)]
pub struct MockSasClient {
    /// Credential to return from login
    credential: Arc<Mutex<Option<Credential>>>,
    /// Pages for list_all_tokens (index 0 is page_number 1)
    token_pages: Arc<Mutex<Vec<Vec<TokenRecord>>>>,
    /// Page served for every page number, as a backend ignoring paging would
    repeated_token_page: Arc<Mutex<Option<Vec<TokenRecord>>>>,
    /// Records for list_user_tokens
    user_tokens: Arc<Mutex<Vec<TokenRecord>>>,
    /// Records for list_audit
    audit_records: Arc<Mutex<Vec<AuditRecord>>>,
    /// Enrollment tasks keyed by exact login
    enrollments: Arc<Mutex<HashMap<String, Vec<EnrollmentTask>>>>,
    /// Logins whose enrollment query fails, with the failure text
    failing_logins: Arc<Mutex<HashMap<String, String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub list_all_tokens: usize,
    pub list_user_tokens: usize,
    pub list_audit: usize,
    pub list_enrollments: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.list_all_tokens
            + self.list_user_tokens
            + self.list_audit
            + self.list_enrollments
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_all_tokens")
    pub method: String,
    /// Login if the endpoint is user-scoped
    pub login: Option<String>,
    /// Page if the endpoint is paged
    pub page: Option<PageRequest>,
    /// Date window for audit queries
    pub window: Option<DateWindow>,
}

impl MockSasClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the credential returned from login.
    pub async fn with_credential(self, credential: Credential) -> Self {
        *self.credential.lock().await = Some(credential);
        self
    }

    /// Configure pages returned from list_all_tokens.
    pub async fn with_token_pages(self, pages: Vec<Vec<TokenRecord>>) -> Self {
        *self.token_pages.lock().await = pages;
        self
    }

    /// Serve the same page whatever page number is asked for.
    pub async fn with_repeated_token_page(self, page: Vec<TokenRecord>) -> Self {
        *self.repeated_token_page.lock().await = Some(page);
        self
    }

    /// Configure records returned from list_user_tokens.
    pub async fn with_user_tokens(self, tokens: Vec<TokenRecord>) -> Self {
        *self.user_tokens.lock().await = tokens;
        self
    }

    /// Configure records returned from list_audit.
    pub async fn with_audit_records(self, records: Vec<AuditRecord>) -> Self {
        *self.audit_records.lock().await = records;
        self
    }

    /// Configure enrollment tasks for one exact login.
    pub async fn with_enrollments(self, login: &str, tasks: Vec<EnrollmentTask>) -> Self {
        self.enrollments
            .lock()
            .await
            .insert(login.to_string(), tasks);
        self
    }

    /// Make every enrollment query for `login` fail with a logical error.
    pub async fn with_failing_login(self, login: &str, details: &str) -> Self {
        self.failing_logins
            .lock()
            .await
            .insert(login.to_string(), details.to_string());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a captured request for test assertions.
    async fn capture_request(
        &self,
        method: &str,
        login: Option<&str>,
        page: Option<&PageRequest>,
        window: Option<&DateWindow>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            login: login.map(|s| s.to_string()),
            page: page.copied(),
            window: window.cloned(),
        });
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockSasClient {
    async fn login(&self, _guid: &str, _signature: &str) -> Result<Credential> {
        self.capture_request("login", None, None, None).await;
        self.check_error().await?;

        self.call_count.lock().await.login += 1;

        let credential = self.credential.lock().await;
        Ok(credential
            .clone()
            .unwrap_or_else(|| Credential::new("mock-credential")))
    }
}

// ============================================================================
// RecordsApi Implementation
// ============================================================================

#[async_trait]
impl RecordsApi for MockSasClient {
    async fn list_all_tokens(
        &self,
        _credential: &Credential,
        page: &PageRequest,
    ) -> Result<Vec<TokenRecord>> {
        self.capture_request("list_all_tokens", None, Some(page), None)
            .await;
        self.check_error().await?;

        self.call_count.lock().await.list_all_tokens += 1;

        if let Some(page) = self.repeated_token_page.lock().await.clone() {
            return Ok(page);
        }

        let pages = self.token_pages.lock().await;
        let index = page.page_number.saturating_sub(1);
        Ok(pages.get(index).cloned().unwrap_or_default())
    }

    async fn list_user_tokens(
        &self,
        _credential: &Credential,
        login: &str,
    ) -> Result<Vec<TokenRecord>> {
        self.capture_request("list_user_tokens", Some(login), None, None)
            .await;
        self.check_error().await?;

        self.call_count.lock().await.list_user_tokens += 1;

        Ok(self.user_tokens.lock().await.clone())
    }

    async fn list_audit(
        &self,
        _credential: &Credential,
        login: &str,
        page: &PageRequest,
        window: &DateWindow,
    ) -> Result<Vec<AuditRecord>> {
        self.capture_request("list_audit", Some(login), Some(page), Some(window))
            .await;
        self.check_error().await?;

        self.call_count.lock().await.list_audit += 1;

        Ok(self.audit_records.lock().await.clone())
    }

    async fn list_enrollments(
        &self,
        _credential: &Credential,
        login: &str,
    ) -> Result<Vec<EnrollmentTask>> {
        self.capture_request("list_enrollments", Some(login), None, None)
            .await;
        self.check_error().await?;

        self.call_count.lock().await.list_enrollments += 1;

        if let Some(details) = self.failing_logins.lock().await.get(login) {
            return Err(ApiError::Logical(details.clone()).into());
        }

        let enrollments = self.enrollments.lock().await;
        Ok(enrollments.get(login).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_login_default_credential() {
        let mock = MockSasClient::new();
        let credential = mock.login("g", "s").await.unwrap();
        assert_eq!(credential.as_str(), "mock-credential");
        assert_eq!(mock.call_counts().await.login, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockSasClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.login("g", "s").await.is_err());
        assert!(mock.login("g", "s").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_token_pages_are_one_based() {
        let token = TokenRecord {
            id: 1,
            kind: "OTP".to_string(),
            owner: "a".to_string(),
            active: true,
        };
        let mock = MockSasClient::new()
            .with_token_pages(vec![vec![token.clone()]])
            .await;
        let credential = Credential::new("c");

        let first = mock
            .list_all_tokens(&credential, &PageRequest::first())
            .await
            .unwrap();
        let second = mock
            .list_all_tokens(&credential, &PageRequest::first().next())
            .await
            .unwrap();

        assert_eq!(first, vec![token]);
        assert!(second.is_empty());
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
