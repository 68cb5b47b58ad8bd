//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and credential issuance
//! - [`RecordsApi`] - Token, audit and enrollment lookups

mod auth;
mod records;

pub use auth::AuthApi;
pub use records::RecordsApi;
