//! Enrollment (activation task) models

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Pending enrollment task for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentTask {
    /// Task ID, unique per user
    pub id: i64,

    /// Date after which the task expires
    #[serde(default, deserialize_with = "null_as_default")]
    pub stop_date: String,

    /// Activation link
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}
