//! Audit log models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Timestamp format used by `audit_datetime`
pub const AUDIT_DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Audit log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Login the event was recorded for
    #[serde(rename = "audit_login", default, deserialize_with = "null_as_default")]
    pub login: String,

    /// Event time, `DD-MM-YYYY HH:MM:SS`
    #[serde(rename = "audit_datetime", default, deserialize_with = "null_as_default")]
    pub timestamp: String,

    /// Client IP address
    #[serde(rename = "audit_ip_address", default, deserialize_with = "null_as_default")]
    pub ip: String,

    /// Client agent string
    #[serde(rename = "audit_agent", default, deserialize_with = "null_as_default")]
    pub agent: String,

    /// Outcome of the audited action
    #[serde(rename = "audit_result", default, deserialize_with = "null_as_default")]
    pub result: String,

    /// Serial number of the token involved
    #[serde(rename = "audit_serialnumber", default, deserialize_with = "null_as_default")]
    pub serial: String,

    /// Free-form comment
    #[serde(rename = "audit_comments", default, deserialize_with = "null_as_default")]
    pub comment: String,
}

impl AuditRecord {
    /// Parsed event time, `None` when the backend sent something unexpected
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.timestamp.trim(), AUDIT_DATETIME_FORMAT).ok()
    }
}

/// Body for `/sdk/audit/audit`
#[derive(Debug, Serialize)]
pub struct AuditRequest<'a> {
    pub org_name: &'a str,
    pub user_login: &'a str,
    pub page_number: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<&'a str>,
}

/// Optional inclusive date window for audit queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateWindow {
    /// Window start, passed to the backend unchanged
    pub start: Option<String>,
    /// Window end, passed to the backend unchanged
    pub stop: Option<String>,
}

impl DateWindow {
    /// Create a window from optional bounds; blank bounds are dropped
    pub fn new(start: Option<String>, stop: Option<String>) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            start: keep(start),
            stop: keep(stop),
        }
    }
}
