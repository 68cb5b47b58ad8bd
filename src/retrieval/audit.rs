//! Audit record lookup for a single user

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::NaiveDateTime;
use log::{debug, warn};

use super::FetchOutcome;
use crate::client::models::{AuditRecord, Credential, DateWindow};
use crate::client::{PageRequest, RecordsApi, bounded_limit};

/// Fetches a user's audit trail, newest first.
pub struct AuditFetcher<C> {
    client: Arc<C>,
}

impl<C: RecordsApi> AuditFetcher<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Up to `min(limit, MAX_RESULTS)` records for `identity`, newest first.
    ///
    /// Reads one full backend page and re-sorts it locally since the backend
    /// does not guarantee any order.
    pub async fn fetch_audit(
        &self,
        credential: &Credential,
        identity: &str,
        limit: usize,
        window: &DateWindow,
    ) -> FetchOutcome<AuditRecord> {
        let limit = bounded_limit(limit);
        let page = PageRequest::first();

        match self
            .client
            .list_audit(credential, identity.trim(), &page, window)
            .await
        {
            Ok(mut records) => {
                debug!("Audit lookup returned {} records", records.len());
                sort_newest_first(&mut records);
                records.truncate(limit);
                FetchOutcome::found(records)
            }
            Err(err) => {
                warn!("Audit lookup for {} failed: {}", identity, err);
                FetchOutcome::failed(err)
            }
        }
    }
}

/// Stable sort by parsed timestamp, descending. Unparsable timestamps sort last.
pub fn sort_newest_first(records: &mut [AuditRecord]) {
    records.sort_by_cached_key(|record| {
        Reverse(record.parsed_timestamp().unwrap_or_else(|| {
            debug!("Unparsable audit timestamp '{}'", record.timestamp);
            NaiveDateTime::MIN
        }))
    });
}
