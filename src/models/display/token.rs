//! Token display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::TokenRecord;

/// Token display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TokenDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub kind: String,

    #[tabled(rename = "OWNER")]
    pub owner: String,

    /// "Active" or "Inactive"
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<TokenRecord> for TokenDisplay {
    fn from(token: TokenRecord) -> Self {
        Self {
            id: token.id,
            kind: token.kind,
            owner: token.owner,
            status: token_status(token.active).to_string(),
        }
    }
}

fn token_status(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}
