//! Token models

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Credential/token record assigned to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Backend token ID
    #[serde(rename = "token_id", default, deserialize_with = "null_as_default")]
    pub id: i64,

    /// Token type (e.g. hardware, software)
    #[serde(rename = "token_type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// Login of the owning user
    #[serde(rename = "token_owner", default, deserialize_with = "null_as_default")]
    pub owner: String,

    /// Whether the token is activated
    #[serde(rename = "token_activation", default, deserialize_with = "null_as_default")]
    pub active: bool,
}

/// Body for `/sdk/tokens/all-tokens`
#[derive(Debug, Serialize)]
pub struct AllTokensRequest<'a> {
    pub org_name: &'a str,
    pub page_number: usize,
    pub page_size: usize,
}

/// Body for the user-scoped endpoints (`user-tokens`, `enrollments`)
#[derive(Debug, Serialize)]
pub struct UserRequest<'a> {
    pub org_name: &'a str,
    pub user_login: &'a str,
}
