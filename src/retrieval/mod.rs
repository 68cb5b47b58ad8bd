//! Retrieval layer
//!
//! Turns the raw backend API into bounded, filtered, de-duplicated results.
//! Each operation owns the credential it is given; nothing is cached or
//! shared between operations.

mod audit;
mod auth;
mod enrollments;
mod tokens;
mod variants;

pub use audit::AuditFetcher;
pub use auth::{ApiCredentials, Authenticator};
pub use enrollments::EnrollmentResolver;
pub use tokens::{TokenFetcher, TokenStrategy};

use crate::error::Error;

/// Records from a lenient fetch plus the failure that emptied it, if any.
///
/// Token and audit lookups degrade to an empty list on failure. Callers that
/// need to tell "nothing found" from "lookup failed" check [`failure`].
///
/// [`failure`]: FetchOutcome::failure
#[derive(Debug)]
pub struct FetchOutcome<T> {
    pub records: Vec<T>,
    pub failure: Option<Error>,
}

impl<T> FetchOutcome<T> {
    /// A successful fetch
    pub fn found(records: Vec<T>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A failed fetch, degraded to no records
    pub fn failed(failure: Error) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(failure),
        }
    }

    /// Whether the fetch failed
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Convert every record, keeping the failure
    pub fn map_records<U>(self, f: impl FnMut(T) -> U) -> FetchOutcome<U> {
        FetchOutcome {
            records: self.records.into_iter().map(f).collect(),
            failure: self.failure,
        }
    }
}
