//! SAS API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, RecordsApi};
use super::models::{
    AllTokensRequest, AuditRecord, AuditRequest, Credential, DateWindow, EnrollmentTask,
    LoginRequest, SdkEnvelope, TokenRecord, UserRequest,
};
use super::pagination::PageRequest;
use crate::error::{ApiError, Result};

/// Every backend request is bounded by this timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const LOGIN_PATH: &str = "/sdk/login";
const ALL_TOKENS_PATH: &str = "/sdk/tokens/all-tokens";
const USER_TOKENS_PATH: &str = "/sdk/users/user-tokens";
const AUDIT_PATH: &str = "/sdk/audit/audit";
const ENROLLMENTS_PATH: &str = "/sdk/users/enrollments";

/// SAS API client.
///
/// Holds no credential: each call is given the one its operation obtained.
#[derive(Debug, Clone)]
pub struct SasClient {
    http: HttpClient,
    base_url: String,
    org_name: String,
}

impl SasClient {
    /// Create a new client for one backend and organization
    pub fn new(base_url: &str, org_name: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            org_name: org_name.to_string(),
        })
    }

    /// Send one request and unwrap the `{Result, Data, Details}` envelope.
    ///
    /// The backend takes its parameters as a JSON body on a GET request.
    async fn call<B, T>(
        &self,
        path: &str,
        credential: Option<&Credential>,
        body: &B,
    ) -> Result<SdkEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self.http.get(&url).json(body);
        if let Some(credential) = credential {
            request = request.header("Authorization", credential.as_str());
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        let envelope: SdkEnvelope<T> = serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {} response: {}", path, e))
        })?;

        if !envelope.is_success() {
            return Err(ApiError::Logical(envelope.failure_details()).into());
        }

        Ok(envelope)
    }

    /// Call a listing endpoint; `Data: null` becomes an empty list
    async fn call_list<B, T>(&self, path: &str, credential: &Credential, body: &B) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let envelope: SdkEnvelope<Vec<T>> = self.call(path, Some(credential), body).await?;
        let data = envelope.data.unwrap_or_default();
        debug!("{} returned {} records", path, data.len());
        Ok(data)
    }
}

#[async_trait]
impl AuthApi for SasClient {
    async fn login(&self, guid: &str, signature: &str) -> Result<Credential> {
        let body = LoginRequest { guid, signature };
        let envelope: SdkEnvelope<serde_json::Value> = self.call(LOGIN_PATH, None, &body).await?;

        envelope
            .token
            .filter(|t| !t.is_empty())
            .map(Credential::new)
            .ok_or_else(|| ApiError::InvalidResponse("Login response has no Token".to_string()).into())
    }
}

#[async_trait]
impl RecordsApi for SasClient {
    async fn list_all_tokens(
        &self,
        credential: &Credential,
        page: &PageRequest,
    ) -> Result<Vec<TokenRecord>> {
        let body = AllTokensRequest {
            org_name: &self.org_name,
            page_number: page.page_number,
            page_size: page.page_size,
        };
        self.call_list(ALL_TOKENS_PATH, credential, &body).await
    }

    async fn list_user_tokens(
        &self,
        credential: &Credential,
        login: &str,
    ) -> Result<Vec<TokenRecord>> {
        let body = UserRequest {
            org_name: &self.org_name,
            user_login: login,
        };
        self.call_list(USER_TOKENS_PATH, credential, &body).await
    }

    async fn list_audit(
        &self,
        credential: &Credential,
        login: &str,
        page: &PageRequest,
        window: &DateWindow,
    ) -> Result<Vec<AuditRecord>> {
        let body = AuditRequest {
            org_name: &self.org_name,
            user_login: login,
            page_number: page.page_number,
            page_size: page.page_size,
            start_date: window.start.as_deref(),
            stop_date: window.stop.as_deref(),
        };
        self.call_list(AUDIT_PATH, credential, &body).await
    }

    async fn list_enrollments(
        &self,
        credential: &Credential,
        login: &str,
    ) -> Result<Vec<EnrollmentTask>> {
        let body = UserRequest {
            org_name: &self.org_name,
            user_login: login,
        };
        self.call_list(ENROLLMENTS_PATH, credential, &body).await
    }
}
