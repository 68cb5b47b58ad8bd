//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod audit;
mod enrollment;
mod token;

pub use audit::AuditDisplay;
pub use enrollment::EnrollmentDisplay;
pub use token::TokenDisplay;
