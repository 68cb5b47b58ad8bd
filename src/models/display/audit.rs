//! Audit record display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::AuditRecord;

/// Audit record display model for table/JSON output.
///
/// Blank fields are shown as `--`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AuditDisplay {
    #[tabled(rename = "TIMESTAMP")]
    pub timestamp: String,

    #[tabled(rename = "LOGIN")]
    pub login: String,

    #[tabled(rename = "IP")]
    pub ip: String,

    #[tabled(rename = "AGENT")]
    pub agent: String,

    #[tabled(rename = "RESULT")]
    pub result: String,

    /// Token serial number
    #[tabled(rename = "SERIAL")]
    pub serial: String,

    #[tabled(rename = "COMMENT")]
    pub comment: String,
}

impl From<AuditRecord> for AuditDisplay {
    fn from(record: AuditRecord) -> Self {
        Self {
            timestamp: or_dash(record.timestamp),
            login: or_dash(record.login),
            ip: or_dash(record.ip),
            agent: or_dash(record.agent),
            result: or_dash(record.result),
            serial: or_dash(record.serial),
            comment: or_dash(record.comment),
        }
    }
}

fn or_dash(value: String) -> String {
    if value.trim().is_empty() {
        "--".to_string()
    } else {
        value
    }
}
