//! Enrollment task display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::EnrollmentTask;

/// Enrollment task display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EnrollmentDisplay {
    #[tabled(rename = "TASK ID")]
    pub id: i64,

    /// Date the activation link stops working
    #[tabled(rename = "EXPIRES")]
    pub stop_date: String,

    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<EnrollmentTask> for EnrollmentDisplay {
    fn from(task: EnrollmentTask) -> Self {
        Self {
            id: task.id,
            stop_date: if task.stop_date.is_empty() {
                "--".to_string()
            } else {
                task.stop_date
            },
            url: task.url,
        }
    }
}
