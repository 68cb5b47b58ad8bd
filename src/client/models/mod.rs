//! SAS API data models
//!
//! Request bodies and the records returned by the `/sdk` endpoints.

mod audit;
mod auth;
mod de;
mod enrollment;
mod envelope;
mod token;

pub use audit::{AUDIT_DATETIME_FORMAT, AuditRecord, AuditRequest, DateWindow};
pub use auth::{Credential, LoginRequest};
pub use enrollment::EnrollmentTask;
pub use envelope::SdkEnvelope;
pub use token::{AllTokensRequest, TokenRecord, UserRequest};
