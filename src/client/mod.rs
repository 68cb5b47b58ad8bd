//! SAS backend API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parallel;
pub mod sas;

pub use api::{AuthApi, RecordsApi};
#[cfg(test)]
pub use mock::MockSasClient;
pub use pagination::{PageRequest, bounded_limit};
pub use parallel::fan_out;
pub use sas::SasClient;

